/*!
 * Database module for the persistent word store.
 *
 * This module provides SQLite-based persistence for:
 * - Translation records, one per attempted word
 * - Daily counters, one per (word, day)
 */

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::{DailyCounter, Translation, TranslationEntry, TranslationRecord};
pub use repository::{Repository, StoreStats};
