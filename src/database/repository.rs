/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for the word store, abstracting
 * away the SQL details and providing type-safe access. Membership checks
 * go through the word index held by the connection, which every repository
 * on that connection shares and updates on insert.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt;

use super::connection::DatabaseConnection;
use super::models::{DailyCounter, Translation, TranslationRecord};

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

/// Columns selected for a translation record, in row-mapping order
const RECORD_COLUMNS: &str = "id, original, translation, created_at";

/// Map a `translation_records` row, decoding the JSON payload
fn parse_record_row(row: &rusqlite::Row) -> rusqlite::Result<TranslationRecord> {
    let payload: Option<String> = row.get(2)?;
    let translation = payload
        .map(|json| serde_json::from_str::<Translation>(&json))
        .transpose()
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(TranslationRecord {
        id: row.get(0)?,
        original: row.get(1)?,
        translation,
        created_at: row.get(3)?,
    })
}

/// Map a `daily_counters` row
fn parse_counter_row(row: &rusqlite::Row) -> rusqlite::Result<DailyCounter> {
    Ok(DailyCounter {
        id: row.get(0)?,
        original: row.get(1)?,
        date: row.get(2)?,
        count: row.get(3)?,
    })
}

impl Repository {
    /// Create a repository over an open connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self::new(DatabaseConnection::new_in_memory()?))
    }

    /// Underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    // =========================================================================
    // Translation Record Operations
    // =========================================================================

    /// Whether any translation attempt has been recorded for `word`
    ///
    /// A miss in the index is confirmed against the table, so records written
    /// through another connection to the same file are seen too.
    pub async fn exists(&self, word: &str) -> Result<bool> {
        if self.db.known_words().read().contains(word) {
            return Ok(true);
        }

        let owned = word.to_string();
        let stored = self
            .db
            .execute_async(move |conn| {
                let stored: bool = conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM translation_records WHERE original = ?1)",
                    [&owned],
                    |row| row.get(0),
                )?;
                Ok(stored)
            })
            .await?;

        if stored {
            debug!("'{}' was recorded outside this connection", word);
            self.db.known_words().write().insert(word.to_string());
        }
        Ok(stored)
    }

    /// Find the translation record for an exact word
    pub async fn find_by_original(&self, word: &str) -> Result<Option<TranslationRecord>> {
        let word = word.to_string();

        self.db
            .execute_async(move |conn| {
                let record = conn
                    .query_row(
                        &format!(
                            "SELECT {} FROM translation_records WHERE original = ?1 ORDER BY id LIMIT 1",
                            RECORD_COLUMNS
                        ),
                        [&word],
                        parse_record_row,
                    )
                    .optional()?;
                Ok(record)
            })
            .await
    }

    /// Append a translation record
    ///
    /// No uniqueness check happens here; callers that need at most one record
    /// per word check [`Repository::exists`] first.
    pub async fn insert_translation(&self, record: &TranslationRecord) -> Result<i64> {
        let record = record.clone();
        let original = record.original.clone();

        let id = self
            .db
            .execute_async(move |conn| {
                let payload = record
                    .translation
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?;

                conn.execute(
                    r#"
                    INSERT INTO translation_records (original, translation, created_at)
                    VALUES (?1, ?2, ?3)
                    "#,
                    params![record.original, payload, record.created_at],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        self.db.known_words().write().insert(original);
        Ok(id)
    }

    /// All records that carry a translation
    pub async fn all_translated(&self) -> Result<Vec<TranslationRecord>> {
        self.db
            .execute_async(|conn| Self::select_records_sync(conn, true))
            .await
    }

    /// All records whose attempt produced no translation
    pub async fn all_untranslated(&self) -> Result<Vec<TranslationRecord>> {
        self.db
            .execute_async(|conn| Self::select_records_sync(conn, false))
            .await
    }

    fn select_records_sync(conn: &Connection, translated: bool) -> Result<Vec<TranslationRecord>> {
        let predicate = if translated { "IS NOT NULL" } else { "IS NULL" };
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM translation_records WHERE translation {} ORDER BY id",
            RECORD_COLUMNS, predicate
        ))?;

        let records = stmt
            .query_map([], parse_record_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    // =========================================================================
    // Daily Counter Operations
    // =========================================================================

    /// Find the counter for a word on a day
    pub async fn find_counter(&self, date: &str, word: &str) -> Result<Option<DailyCounter>> {
        let date = date.to_string();
        let word = word.to_string();

        self.db
            .execute_async(move |conn| {
                let counter = conn
                    .query_row(
                        r#"
                        SELECT id, original, date, count
                        FROM daily_counters
                        WHERE date = ?1 AND original = ?2
                        "#,
                        params![date, word],
                        parse_counter_row,
                    )
                    .optional()?;
                Ok(counter)
            })
            .await
    }

    /// All counters recorded for a day, in no particular order
    pub async fn counters_for_date(&self, date: &str) -> Result<Vec<DailyCounter>> {
        let date = date.to_string();

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, original, date, count FROM daily_counters WHERE date = ?1",
                )?;
                let counters = stmt
                    .query_map([&date], parse_counter_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(counters)
            })
            .await
    }

    /// Insert a counter, or replace the count of the existing (word, day) row
    pub async fn upsert_counter(&self, counter: &DailyCounter) -> Result<()> {
        let counter = counter.clone();
        let now = chrono::Utc::now().to_rfc3339();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO daily_counters (original, date, count, updated_at)
                    VALUES (?1, ?2, ?3, ?4)
                    ON CONFLICT(original, date) DO UPDATE SET
                        count = excluded.count,
                        updated_at = excluded.updated_at
                    "#,
                    params![counter.original, counter.date, counter.count, now],
                )?;
                Ok(())
            })
            .await
    }

    /// Days that have at least one counter, oldest first
    pub async fn known_days(&self) -> Result<Vec<String>> {
        self.db
            .execute_async(|conn| {
                let mut stmt =
                    conn.prepare("SELECT DISTINCT date FROM daily_counters ORDER BY date")?;
                let days = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<rusqlite::Result<Vec<String>>>()?;
                Ok(days)
            })
            .await
    }

    /// Get store statistics
    pub async fn stats(&self) -> Result<StoreStats> {
        self.db
            .execute_async(|conn| {
                let count = |sql: &str| -> Result<i64> {
                    Ok(conn.query_row(sql, [], |row| row.get(0))?)
                };

                Ok(StoreStats {
                    translated_words: count(
                        "SELECT COUNT(*) FROM translation_records WHERE translation IS NOT NULL",
                    )?,
                    untranslated_words: count(
                        "SELECT COUNT(*) FROM translation_records WHERE translation IS NULL",
                    )?,
                    counter_rows: count("SELECT COUNT(*) FROM daily_counters")?,
                    days: count("SELECT COUNT(DISTINCT date) FROM daily_counters")?,
                })
            })
            .await
    }
}

/// Word store statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Records with a translation payload
    pub translated_words: i64,
    /// Records whose attempt yielded nothing
    pub untranslated_words: i64,
    /// Number of (word, day) counter rows
    pub counter_rows: i64,
    /// Number of distinct days with counters
    pub days: i64,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Translated: {}, Untranslated: {}, Counters: {}, Days: {}",
            self.translated_words, self.untranslated_words, self.counter_rows, self.days
        )
    }
}
