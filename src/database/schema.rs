/*!
 * Database schema definitions.
 *
 * This module contains the SQL schema for the word store and checks the
 * recorded schema version when a store is opened.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;

use crate::errors::CollectorError;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Initializing word store schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version != SCHEMA_VERSION {
        return Err(CollectorError::StoreUnavailable(format!(
            "unsupported schema version {} (expected {})",
            current_version, SCHEMA_VERSION
        ))
        .into());
    } else {
        debug!("Word store schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    // One row per translation attempt. Uniqueness of `original` is the
    // cache's job, so the index here is deliberately non-unique.
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translation_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original TEXT NOT NULL,
            translation TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_translation_records_original ON translation_records(original);
        "#,
    )?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_counters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original TEXT NOT NULL,
            date TEXT NOT NULL,
            count INTEGER NOT NULL CHECK (count >= 0),
            updated_at TEXT NOT NULL,
            UNIQUE(original, date)
        );

        CREATE INDEX IF NOT EXISTS idx_daily_counters_date ON daily_counters(date);
        "#,
    )?;

    info!("Word store schema created successfully");
    Ok(())
}
