//! Bookmark persistence adapter.
//!
//! Mirrors the full bookmark collection into a [`KeyValueStore`] as a JSON
//! array under a fixed key. The adapter knows nothing about business rules:
//! it reads, parses, serializes and overwrites.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::types::bookmark::BookmarkedExample;
use crate::types::errors::StorageError;

/// Key under which the bookmark collection is stored.
pub const BOOKMARKS_STORAGE_KEY: &str = "bookmarks";

/// Reads and writes the bookmark collection.
#[derive(Clone)]
pub struct BookmarkPersistence {
    store: Rc<dyn KeyValueStore>,
}

impl BookmarkPersistence {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the stored collection.
    ///
    /// Returns `None` when nothing is stored, and also when the stored value
    /// cannot be read or parsed. Failures are logged, never returned.
    pub fn load(&self) -> Option<Vec<BookmarkedExample>> {
        let raw = match self.store.get_item(BOOKMARKS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored bookmarks");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored bookmarks");
                return None;
            }
        };

        match serde_json::from_str::<Vec<BookmarkedExample>>(&raw) {
            Ok(records) => {
                debug!(count = records.len(), "loaded bookmarks");
                Some(records)
            }
            Err(e) => {
                warn!(error = %e, "failed to parse stored bookmarks, discarding");
                None
            }
        }
    }

    /// Overwrites the stored collection with `records`.
    pub fn try_save(&self, records: &[BookmarkedExample]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set_item(BOOKMARKS_STORAGE_KEY, &json)
    }

    /// Like [`try_save`](Self::try_save), but a failed write is logged and dropped.
    pub fn save(&self, records: &[BookmarkedExample]) {
        if let Err(e) = self.try_save(records) {
            warn!(error = %e, count = records.len(), "failed to save bookmarks");
        }
    }
}
