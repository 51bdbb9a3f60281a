/*!
 * Database entity models.
 *
 * These structures map directly to database tables. Rows handed out by the
 * repository are value snapshots; mutating one never touches the store.
 */

use serde::{Deserialize, Serialize};

/// One sense of a translated word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Grammatical category of this sense (noun, verb, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Target-language text
    pub text: String,
    /// Usage examples formatted as "phrase — translation"
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

impl TranslationEntry {
    /// Create an entry without examples
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            examples: None,
        }
    }

    /// Attach usage examples
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = Some(examples);
        self
    }
}

/// Structured dictionary result for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Grammatical gender, when the source language has one
    #[serde(default)]
    pub gender: Option<String>,
    /// Part of speech of the looked-up form
    #[serde(default)]
    pub part_of_speech: Option<String>,
    /// Canonical form of the original word as reported by the dictionary
    pub original: String,
    /// Ordered senses, most relevant first
    #[serde(default)]
    pub translations: Vec<TranslationEntry>,
}

impl Translation {
    /// Create a payload with no senses
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            gender: None,
            part_of_speech: None,
            original: original.into(),
            translations: Vec::new(),
        }
    }

    /// Set the part of speech
    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    /// Set the gender
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Append a sense
    pub fn with_entry(mut self, entry: TranslationEntry) -> Self {
        self.translations.push(entry);
        self
    }

    /// Category of the first sense, used for ranking filters
    pub fn primary_category(&self) -> Option<&str> {
        self.translations.first().map(|entry| entry.kind.as_str())
    }
}

/// A single translation attempt for a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Database ID
    pub id: i64,
    /// Normalized source word
    pub original: String,
    /// Dictionary payload; `None` if the attempt produced nothing
    pub translation: Option<Translation>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl TranslationRecord {
    /// Create a new record (without database ID)
    pub fn new(original: impl Into<String>, translation: Option<Translation>) -> Self {
        Self {
            id: 0, // Will be assigned by database
            original: original.into(),
            translation,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the attempt yielded a translation
    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }
}

/// Occurrence count of a word on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounter {
    /// Database ID
    pub id: i64,
    /// Normalized word
    pub original: String,
    /// Canonical day string (YYYY-MM-DD)
    pub date: String,
    /// Total occurrences reported for that day
    pub count: u32,
}

impl DailyCounter {
    /// Create a new counter row (without database ID)
    pub fn new(original: impl Into<String>, date: impl Into<String>, count: u32) -> Self {
        Self {
            id: 0,
            original: original.into(),
            date: date.into(),
            count,
        }
    }
}
