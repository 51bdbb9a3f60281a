//! Word normalization shared by the cache, the aggregator and the ranker.

use anyhow::Result;

use crate::errors::CollectorError;

/// Normalize a word to its stored form (trimmed, lowercase)
///
/// Rejects words that are empty after trimming, before anything touches the
/// store or the dictionary.
pub fn normalize_word(word: &str) -> Result<String> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(CollectorError::InvalidWord(word.to_string()).into());
    }
    Ok(normalized)
}
