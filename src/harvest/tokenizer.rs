/*!
 * Word counting for article text.
 *
 * Lines are split on whitespace and basic punctuation. Tokens carrying
 * digits, leftover HTML identifiers or a single character are skipped, and
 * whatever is not a word character is stripped from the rest.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Word to number of occurrences
pub type WordCounts = HashMap<String, u32>;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.,()]").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\p{N}]").unwrap());
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Normalized word for a raw token, if the token counts as a word
fn clean_token(token: &str) -> Option<String> {
    let token = token.to_lowercase();

    if DECIMAL_DIGIT.is_match(&token) || token.contains("html_") {
        return None;
    }
    if token.chars().count() <= 1 {
        return None;
    }

    let word = NON_WORD.replace_all(&token, "");
    if word.is_empty() {
        None
    } else {
        Some(word.into_owned())
    }
}

/// Count the words of a sequence of lines
pub fn count_words<I, S>(lines: I) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = WordCounts::new();

    for line in lines {
        for word in SEPARATORS.split(line.as_ref()).filter_map(clean_token) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    counts
}

/// Add the counts of one article to a running total
pub fn merge_counts(total: &mut WordCounts, counts: WordCounts) {
    for (word, count) in counts {
        *total.entry(word).or_insert(0) += count;
    }
}

/// The `n` most frequent words, by count descending then word ascending
pub fn most_common(counts: &WordCounts, n: usize) -> Vec<(String, u32)> {
    let mut entries: Vec<(String, u32)> = counts
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}
