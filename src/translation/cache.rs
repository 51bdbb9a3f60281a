/*!
 * Persistent translation cache.
 *
 * The cache makes sure every distinct word is looked up in the dictionary at
 * most once over the lifetime of the store. Whatever the lookup yields is
 * recorded, including "nothing": a word whose lookup failed is never retried.
 */

use anyhow::Result;
use log::{debug, warn};
use std::fmt;

use crate::database::{Repository, Translation, TranslationRecord};
use crate::providers::Dictionary;
use crate::words::normalize_word;

/// Result of a single dictionary attempt
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// The dictionary returned a payload
    Found(Translation),
    /// The dictionary has no entry for the word
    NotFound,
    /// The lookup failed; the cause is kept for diagnostics only
    Failed(String),
}

impl TranslationOutcome {
    /// Payload to persist; only a found translation has one
    pub fn into_payload(self) -> Option<Translation> {
        match self {
            Self::Found(translation) => Some(translation),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}

/// What `ensure_translated` did for a word
#[derive(Debug, Clone, PartialEq)]
pub enum EnsureOutcome {
    /// A record already existed, the dictionary was not called
    AlreadyKnown,
    /// The dictionary was called and its outcome recorded
    Recorded(TranslationOutcome),
}

/// Dictionary lookups backed by the word store
pub struct TranslationCache<D: Dictionary> {
    repository: Repository,
    dictionary: D,
}

impl<D: Dictionary> TranslationCache<D> {
    /// Create a cache over a repository and a dictionary
    pub fn new(repository: Repository, dictionary: D) -> Self {
        Self {
            repository,
            dictionary,
        }
    }

    /// Underlying dictionary
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Underlying repository
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Make sure exactly one translation record exists for `word`
    ///
    /// Dictionary failures are recorded as "no translation" and reported
    /// through the returned outcome. Only invalid input and store failures
    /// are returned as errors.
    pub async fn ensure_translated(&self, word: &str) -> Result<EnsureOutcome> {
        let word = normalize_word(word)?;

        if self.repository.exists(&word).await? {
            debug!("'{}' already in the word store, skipping lookup", word);
            return Ok(EnsureOutcome::AlreadyKnown);
        }

        let outcome = match self.dictionary.lookup(&word).await {
            Ok(Some(translation)) => TranslationOutcome::Found(translation),
            Ok(None) => {
                debug!("No dictionary entry for '{}'", word);
                TranslationOutcome::NotFound
            }
            Err(e) => {
                warn!("Lookup of '{}' failed, recording it as untranslated: {}", word, e);
                TranslationOutcome::Failed(e.to_string())
            }
        };

        let record = TranslationRecord::new(word, outcome.clone().into_payload());
        self.repository.insert_translation(&record).await?;

        Ok(EnsureOutcome::Recorded(outcome))
    }
}

impl<D: Dictionary> fmt::Debug for TranslationCache<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationCache")
            .field("dictionary", &self.dictionary)
            .finish()
    }
}
