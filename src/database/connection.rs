//! SQLite database connection management for pocketcalc.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// Database wrapper backing the SQLite key-value store.
///
/// The `Database` struct owns a `rusqlite::Connection` and ensures the
/// `kv_store` table exists at the current schema version when opened.
/// It is not shared across threads directly; `SqliteStore` serializes
/// access behind a mutex.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// File-backed databases use WAL journaling.
    ///
    /// # Arguments
    /// * `path` - File system path of the preference database, usually
    ///   [`crate::config::AppConfig::database_path`].
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// Used by tests and ephemeral sessions; the stored history and theme
    /// are discarded when the `Database` is dropped.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Brings the schema up to [`migrations::CURRENT_SCHEMA_VERSION`].
    ///
    /// Already applied versions are skipped, so this is idempotent and runs
    /// on every open.
    fn run_migrations(&self) -> Result<(), rusqlite::Error> {
        migrations::run_all(&self.conn)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    ///
    /// `SqliteStore` runs its `kv_store` queries through this handle.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
