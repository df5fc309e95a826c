//! pocketcalc persistence layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value adapters the history and settings components persist through.
//!
//! # Usage
//!
//! ```no_run
//! use pocketcalc::database::{KeyValueStore, SqliteStore, THEME_KEY};
//!
//! # async fn demo() -> Result<(), pocketcalc::types::errors::StorageError> {
//! let store = SqliteStore::open("pocketcalc.db")?;
//! store.set(THEME_KEY, "dark").await?;
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod migrations;
pub mod store;

pub use connection::Database;
pub use store::{KeyValueStore, MemoryStore, SqliteStore, HISTORY_KEY, THEME_KEY};
