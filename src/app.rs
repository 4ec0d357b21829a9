//! App Core for Cheatsheets.
//!
//! Builds the durable store once and injects it into the bookmark store and
//! theme preference. `startup` plays the role of mounting: it hydrates both
//! from storage before any write-back is allowed.

use std::fs;
use std::rc::Rc;

use tracing::info;

use crate::config::AppConfig;
use crate::managers::bookmark_accessor::{use_bookmarks, BookmarkAccessor};
use crate::managers::bookmark_persistence::BookmarkPersistence;
use crate::managers::bookmark_store::BookmarkStore;
use crate::services::theme_preference::ThemePreference;
use crate::storage::{KeyValueStore, SqliteStore};
use crate::types::errors::StorageError;
use crate::types::theme::ThemeMode;

/// Central application struct holding the stores.
pub struct App {
    pub store: Rc<dyn KeyValueStore>,
    /// `None` when no bookmark store is mounted; consumers then get the fallback.
    pub bookmark_store: Option<BookmarkStore>,
    pub theme: ThemePreference,
}

impl App {
    /// Opens the SQLite store under the configured data directory.
    pub fn new(config: &AppConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to create data directory {}: {}",
                config.data_dir.display(),
                e
            ))
        })?;
        let store = SqliteStore::open(config.database_path())?;
        info!(path = %config.database_path().display(), "opened durable store");
        Ok(Self::with_store(Rc::new(store), config.default_theme))
    }

    /// Builds an app over an existing store with a mounted bookmark store.
    pub fn with_store(store: Rc<dyn KeyValueStore>, default_theme: ThemeMode) -> Self {
        let bookmark_store = BookmarkStore::new(BookmarkPersistence::new(store.clone()));
        let theme = ThemePreference::new(store.clone(), default_theme);
        Self {
            store,
            bookmark_store: Some(bookmark_store),
            theme,
        }
    }

    /// Builds an app without a bookmark store.
    pub fn without_bookmarks(store: Rc<dyn KeyValueStore>, default_theme: ThemeMode) -> Self {
        let theme = ThemePreference::new(store.clone(), default_theme);
        Self {
            store,
            bookmark_store: None,
            theme,
        }
    }

    /// Hydrates every mounted store from durable storage.
    pub fn startup(&mut self) {
        if let Some(bookmarks) = self.bookmark_store.as_mut() {
            bookmarks.hydrate();
        }
        self.theme.hydrate();
    }

    /// Bookmark access for consumers, live or fallback.
    pub fn bookmarks(&mut self) -> BookmarkAccessor<'_> {
        use_bookmarks(self.bookmark_store.as_mut())
    }
}
