//! Language utilities for the dictionary language pair
//!
//! The dictionary service addresses languages by ISO 639-1 (2-letter) codes
//! and joins the pair with a dash (`de-ru`). Configuration may use either
//! 2-letter or 3-letter codes; these helpers normalize them.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Common ISO 639-2/B codes that differ from their ISO 639-2/T spelling
fn bibliographic_to_terminological(code: &str) -> &str {
    match code {
        "ger" => "deu",
        "fre" => "fra",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "rum" => "ron",
        "slo" => "slk",
        other => other,
    }
}

/// Resolve a 2- or 3-letter language code to a known language
fn resolve(code: &str) -> Result<Language> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(bibliographic_to_terminological(&normalized)),
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to the 2-letter form the dictionary expects
pub fn dictionary_code(code: &str) -> Result<String> {
    let language = resolve(code)?;
    language
        .to_639_1()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Language has no 2-letter code: {}", code))
}

/// Build the `source-target` pair used by the dictionary lookup endpoint
pub fn language_pair(source: &str, target: &str) -> Result<String> {
    Ok(format!("{}-{}", dictionary_code(source)?, dictionary_code(target)?))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(resolve(code)?.to_name().to_string())
}
