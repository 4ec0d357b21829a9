//! Bookmark Store for Cheatsheets.
//!
//! Implements `BookmarkStoreTrait` over an in-memory, insertion-ordered list
//! of [`BookmarkedExample`] records mirrored into durable storage through
//! [`BookmarkPersistence`].
//!
//! The store starts [`HydrationState::Unhydrated`]. [`BookmarkStore::hydrate`]
//! performs the one durable read and moves it to [`HydrationState::Hydrated`].
//! Mutations are applied in memory immediately in either state, but nothing is
//! written back until hydration has completed, so an empty pre-hydration list
//! can never overwrite persisted bookmarks.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::bookmark_persistence::BookmarkPersistence;
use crate::types::bookmark::{BookmarkedExample, NewBookmark};

/// Operations available to bookmark consumers.
pub trait BookmarkStoreTrait {
    /// Read-only snapshot in insertion order.
    fn bookmarks(&self) -> &[BookmarkedExample];
    fn add_bookmark(&mut self, bookmark: NewBookmark);
    fn remove_bookmark(&mut self, cheat_sheet_id: &str, section_id: &str, example_title: &str);
    fn is_bookmarked(&self, cheat_sheet_id: &str, section_id: &str, example_title: &str) -> bool;
    fn clear_all_bookmarks(&mut self);
}

/// Lifecycle of a [`BookmarkStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationState {
    /// Constructed; durable storage not yet consulted.
    Unhydrated,
    /// Durable storage has been read once.
    Hydrated,
}

/// Returns the current UNIX timestamp in milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// The live bookmark collection.
pub struct BookmarkStore {
    bookmarks: Vec<BookmarkedExample>,
    persistence: BookmarkPersistence,
    state: HydrationState,
    /// Set when a mutation happened before hydration.
    pending_write: bool,
}

impl BookmarkStore {
    /// Creates an unhydrated, empty store.
    pub fn new(persistence: BookmarkPersistence) -> Self {
        Self {
            bookmarks: Vec::new(),
            persistence,
            state: HydrationState::Unhydrated,
            pending_write: false,
        }
    }

    pub fn state(&self) -> HydrationState {
        self.state
    }

    pub fn is_hydrated(&self) -> bool {
        self.state == HydrationState::Hydrated
    }

    /// Reads the persisted collection into memory. Runs at most once.
    ///
    /// A stored collection replaces whatever is in memory. When nothing usable
    /// is stored, the in-memory list is kept, and written back if it was
    /// mutated before hydration.
    pub fn hydrate(&mut self) {
        if self.is_hydrated() {
            return;
        }

        match self.persistence.load() {
            Some(records) => {
                if self.pending_write {
                    debug!(
                        dropped = self.bookmarks.len(),
                        "stored bookmarks replace pre-hydration changes"
                    );
                }
                self.bookmarks = records;
                self.state = HydrationState::Hydrated;
            }
            None => {
                self.state = HydrationState::Hydrated;
                if self.pending_write {
                    self.persist();
                }
            }
        }
        self.pending_write = false;
        debug!(count = self.bookmarks.len(), "bookmark store hydrated");
    }

    /// Writes the collection back, or defers it until hydration.
    fn persist(&mut self) {
        match self.state {
            HydrationState::Hydrated => self.persistence.save(&self.bookmarks),
            HydrationState::Unhydrated => self.pending_write = true,
        }
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn bookmarks(&self) -> &[BookmarkedExample] {
        &self.bookmarks
    }

    /// Appends a record stamped with the current time. Duplicates are kept.
    fn add_bookmark(&mut self, bookmark: NewBookmark) {
        self.bookmarks.push(bookmark.into_record(now_millis()));
        self.persist();
    }

    /// Removes every record matching the triple. No-op when nothing matches.
    fn remove_bookmark(&mut self, cheat_sheet_id: &str, section_id: &str, example_title: &str) {
        self.bookmarks
            .retain(|b| !b.matches(cheat_sheet_id, section_id, example_title));
        self.persist();
    }

    fn is_bookmarked(&self, cheat_sheet_id: &str, section_id: &str, example_title: &str) -> bool {
        self.bookmarks
            .iter()
            .any(|b| b.matches(cheat_sheet_id, section_id, example_title))
    }

    fn clear_all_bookmarks(&mut self) {
        self.bookmarks.clear();
        self.persist();
    }
}
