/*!
 * Mock dictionary for testing.
 *
 * The mock answers from a fixed table of entries, fails for words marked as
 * failing and reports "not found" for everything else. Clones share the
 * call log, so a test can hand one clone to the cache and inspect another.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::database::{Translation, TranslationEntry};
use crate::errors::ProviderError;
use crate::providers::Dictionary;

/// Scripted dictionary for tests
#[derive(Debug, Clone, Default)]
pub struct MockDictionary {
    /// Known words and their payloads
    entries: HashMap<String, Translation>,
    /// Words whose lookup fails with an API error
    failing: HashSet<String>,
    /// Every word looked up, in call order
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDictionary {
    /// Create an empty dictionary that knows no words
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word with a single sense of the given category
    pub fn with_word(self, word: &str, category: &str, text: &str) -> Self {
        let translation = Translation::new(word)
            .with_part_of_speech(category)
            .with_entry(TranslationEntry::new(category, text));
        self.with_translation(word, translation)
    }

    /// Add a word with a full payload
    pub fn with_translation(mut self, word: &str, translation: Translation) -> Self {
        self.entries.insert(word.to_string(), translation);
        self
    }

    /// Make lookups of `word` fail
    pub fn failing_on(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    /// Total number of lookups made
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of lookups made for one word
    pub fn calls_for(&self, word: &str) -> usize {
        self.calls.lock().iter().filter(|w| w.as_str() == word).count()
    }
}

#[async_trait]
impl Dictionary for MockDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<Translation>, ProviderError> {
        self.calls.lock().push(word.to_string());

        if self.failing.contains(word) {
            return Err(ProviderError::ApiError {
                status_code: 503,
                message: format!("Simulated dictionary failure for '{}'", word),
            });
        }

        Ok(self.entries.get(word).cloned())
    }
}
