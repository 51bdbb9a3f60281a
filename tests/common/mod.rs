/*!
 * Common test utilities for the word-collector test suite
 */

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use word_collector::database::{DatabaseConnection, Repository};
use word_collector::providers::mock::MockDictionary;
use word_collector::{DailyCounter, Translation, TranslationEntry, TranslationRecord};


/// Day used by tests that do not care about the calendar
pub const TEST_DAY: &str = "2024-05-01";

/// Route library logs through the test harness; safe to call repeatedly
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Path of a word store inside a temporary directory
pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("store").join("words.db")
}

/// Open (or reopen) a file-backed repository
pub fn open_store(path: &Path) -> Result<Repository> {
    Ok(Repository::new(DatabaseConnection::new(path)?))
}

/// Single-sense payload of the given category
pub fn translation(word: &str, category: &str, text: &str) -> Translation {
    Translation::new(word)
        .with_part_of_speech(category)
        .with_entry(TranslationEntry::new(category, text))
}

/// Dictionary knowing the handful of words the tests rank
pub fn german_dictionary() -> MockDictionary {
    MockDictionary::new()
        .with_word("haus", "noun", "дом")
        .with_word("auto", "noun", "машина")
        .with_word("brot", "noun", "хлеб")
        .with_word("gehen", "verb", "идти")
        .with_word("schnell", "adjective", "быстрый")
}

/// Store a translation and a counter for each (word, category, count)
pub async fn seed_translated(repository: &Repository, day: &str, words: &[(&str, &str, u32)]) -> Result<()> {
    for (word, category, count) in words {
        repository
            .insert_translation(&TranslationRecord::new(*word, Some(translation(word, category, word))))
            .await?;
        repository
            .upsert_counter(&DailyCounter::new(*word, day, *count))
            .await?;
    }
    Ok(())
}
