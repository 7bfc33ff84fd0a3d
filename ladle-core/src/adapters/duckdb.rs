//! DuckDB-backed persistent store
//!
//! A single `sys_store` table of JSON blobs keyed by name - the local
//! equivalent of the browser storage the original application relied on.
//! Reads and writes are synchronous and atomic at single-key granularity;
//! there is no cross-key transaction and no schema migration mechanism.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use duckdb::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::{Error, Result};

/// Fixed namespace prefix for every stored key
pub const NAMESPACE: &str = "ladle.";

/// Ordered sequence of User records
pub const USERS_KEY: &str = "ladle.users";
/// Ordered sequence of Review records
pub const REVIEWS_KEY: &str = "ladle.reviews";
/// Mapping of recipe id to normalized Recipe
pub const RECIPES_KEY: &str = "ladle.recipes";
/// Single optional User (the current session)
pub const SESSION_KEY: &str = "ladle.session";

/// Maximum number of retries when the database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400, 800ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// DuckDB key-value store
pub struct DuckDbStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DuckDbStore {
    /// Open (or create) the store at the given path
    ///
    /// Includes retry logic with exponential backoff for file locking errors,
    /// which can occur when a second ladle process touches the same data dir.
    pub fn open(db_path: &Path) -> Result<Self> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    Self::ensure_schema(&conn)?;
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: Some(db_path.to_path_buf()),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        eprintln!(
                            "[ladle] store busy, retrying in {}ms (attempt {}/{}): {}",
                            delay.as_millis(),
                            attempt + 1,
                            MAX_RETRIES,
                            err_msg
                        );
                        thread::sleep(delay);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::storage(format!("failed to open store after {} retries", MAX_RETRIES))
        }))
    }

    /// Open an in-memory store (used by tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::db)?;
        Self::ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: None,
        })
    }

    /// Attempt to open a database connection (called by open() with retry logic)
    fn try_open_connection(db_path: &Path) -> Result<Connection> {
        // Disable extension autoloading to avoid macOS code signing issues
        // with cached extensions in ~/.duckdb/extensions
        let config = duckdb::Config::default()
            .enable_autoload_extension(false)
            .map_err(Error::db)?;
        Connection::open_with_flags(db_path, config).map_err(Error::db)
    }

    /// Create the blob table if it does not exist yet
    ///
    /// The namespace is versionless: there is no migrations table and no
    /// upgrade path for stored blobs.
    fn ensure_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sys_store (
                entry_key TEXT PRIMARY KEY,
                entry_value TEXT NOT NULL
            )",
        )
        .map_err(Error::db)?;
        Ok(())
    }

    /// Read the raw blob stored under a key, if any
    pub fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT entry_value FROM sys_store WHERE entry_key = ?")
            .map_err(Error::db)?;

        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .map_err(Error::db)?;

        match rows.next() {
            Some(value) => Ok(Some(value.map_err(Error::db)?)),
            None => Ok(None),
        }
    }

    /// Write a raw blob under a key, replacing any existing value
    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO sys_store (entry_key, entry_value) VALUES (?, ?)",
            params![key, value],
        )
        .map_err(Error::db)?;
        Ok(())
    }

    /// Delete a key, if present
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM sys_store WHERE entry_key = ?", params![key])
            .map_err(Error::db)?;
        Ok(())
    }

    /// Read and deserialize the value stored under a key
    ///
    /// A missing, unreadable or unparsable blob never surfaces to the caller:
    /// it is logged and the supplied default is returned, preserving forward
    /// progress over a corrupt entry.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.read_raw(key) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("[ladle] store read failed for {}, using default: {}", key, e);
                return default;
            }
        };

        match raw {
            None => default,
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("[ladle] corrupt blob at {}, using default: {}", key, e);
                    default
                }
            },
        }
    }

    /// Serialize and store a value under a key
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.write_raw(key, &text)
    }

    /// Path of the backing database file, if file-backed
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}
