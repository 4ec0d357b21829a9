//! Durable key-value storage for Cheatsheets.
//!
//! The [`KeyValueStore`] trait models a per-origin local storage area: string
//! keys mapping to string values, read and written synchronously. Two backends
//! are provided: [`SqliteStore`] for the on-disk mirror and [`MemoryStore`] for
//! tests and ephemeral sessions.
//!
//! # Usage
//!
//! ```no_run
//! use cheatsheets::storage::{KeyValueStore, SqliteStore};
//!
//! let store = SqliteStore::open("cheatsheets.db").expect("failed to open store");
//! store.set_item("theme", "dark").expect("write failed");
//! assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
//! ```

pub mod connection;
pub mod memory_store;
pub mod migrations;
pub mod sqlite_store;

pub use connection::Database;
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use crate::types::errors::StorageError;

/// A synchronous string-to-string store shared by everything that persists state.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
