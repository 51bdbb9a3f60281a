/*!
 * Markdown report of a day's top words.
 */

use anyhow::Result;
use log::info;
use std::fmt::Write;
use std::path::Path;

use crate::file_utils::FileManager;
use crate::ranking::RankedWord;

/// Render a ranking as a Markdown document
pub fn render_markdown(date: &str, category: Option<&str>, words: &[RankedWord]) -> String {
    let mut out = String::new();

    match category {
        Some(category) => {
            let _ = writeln!(out, "# Top {} words of {}", category, date);
        }
        None => {
            let _ = writeln!(out, "# Top words of {}", date);
        }
    }
    out.push('\n');

    if words.is_empty() {
        out.push_str("_No translated words recorded for this day._\n");
        return out;
    }

    for (rank, entry) in words.iter().enumerate() {
        let translation = &entry.translation;
        let _ = write!(out, "## {}. {}", rank + 1, translation.original);
        if let Some(gender) = translation.gender.as_deref().filter(|g| !g.is_empty()) {
            let _ = write!(out, " ({})", gender);
        }
        let _ = writeln!(out, " × {}", entry.count);
        out.push('\n');

        for sense in &translation.translations {
            let _ = writeln!(out, "- **{}** _{}_", sense.text, sense.kind);
            for example in sense.examples.iter().flatten() {
                let _ = writeln!(out, "  - {}", example);
            }
        }
        out.push('\n');
    }

    out
}

/// Render a ranking and write it to `path`
pub fn write_report<P: AsRef<Path>>(
    path: P,
    date: &str,
    category: Option<&str>,
    words: &[RankedWord],
) -> Result<()> {
    let content = render_markdown(date, category, words);
    FileManager::write_to_file(&path, &content)?;
    info!("Wrote report with {} word(s) to {:?}", words.len(), path.as_ref());
    Ok(())
}
