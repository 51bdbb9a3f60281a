/*!
 * Database connection management.
 *
 * This module handles SQLite database connection creation and
 * initialization, and provides async-safe access patterns using tokio's
 * spawn_blocking. Every connection also carries the index of words that
 * have a translation record, shared by all its clones.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use parking_lot::RwLock;
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::schema;
use crate::errors::CollectorError;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "words.db";

/// Default database directory name under user's data directory
const DEFAULT_DB_DIRNAME: &str = "word-collector";

/// Database connection wrapper with thread-safe access
#[derive(Clone)]
pub struct DatabaseConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
    /// Words with at least one translation record, translated or not
    known_words: Arc<RwLock<HashSet<String>>>,
}

/// Wrap any opening failure as a fatal store error, keeping one that is already classified
fn store_unavailable(error: anyhow::Error, db_path: &Path) -> anyhow::Error {
    if error.downcast_ref::<CollectorError>().is_some() {
        return error;
    }
    CollectorError::StoreUnavailable(format!("{:?}: {:#}", db_path, error)).into()
}

/// Every word that has a translation record
fn load_known_words(conn: &Connection) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT original FROM translation_records")?;
    let words = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<HashSet<String>>>()
        .context("Failed to load translation index")?;

    debug!("Loaded {} known words from the word store", words.len());
    Ok(words)
}

impl DatabaseConnection {
    /// Open (or create) the database at the specified path
    ///
    /// Any failure is reported as [`CollectorError::StoreUnavailable`]: a run
    /// cannot proceed without its store.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        Self::open(&db_path).map_err(|e| store_unavailable(e, &db_path))
    }

    fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {:?}", parent))?;
        }

        info!("Opening word store at: {:?}", db_path);

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        schema::initialize_schema(&conn)?;
        let known_words = load_known_words(&conn)?;

        Ok(Self {
            db_path: db_path.to_path_buf(),
            connection: Arc::new(Mutex::new(conn)),
            known_words: Arc::new(RwLock::new(known_words)),
        })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        debug!("Creating in-memory word store");

        let conn =
            Connection::open_in_memory().context("Failed to create in-memory database")?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
            known_words: Arc::new(RwLock::new(HashSet::new())),
        })
    }

    /// Get the default database path
    pub fn default_database_path() -> Result<PathBuf> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Word index shared by every handle on this connection
    pub(crate) fn known_words(&self) -> &RwLock<HashSet<String>> {
        &self.known_words
    }

    /// Execute a database operation with the connection
    ///
    /// This method acquires the mutex lock and executes the provided closure
    /// with access to the connection. For async contexts, use `execute_async`.
    pub fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

        f(&conn)
    }

    /// Execute a database operation asynchronously using spawn_blocking
    ///
    /// This is the preferred method for async contexts as it prevents
    /// blocking the async runtime.
    pub async fn execute_async<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| anyhow::anyhow!("Failed to acquire database lock: {}", e))?;

            f(&conn)
        })
        .await
        .context("Database task panicked")?
    }
}
