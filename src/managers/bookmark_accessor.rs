//! Consumer-side access to the bookmark store.
//!
//! [`use_bookmarks`] hands out a [`BookmarkAccessor`]: the live store when one
//! is mounted, otherwise a [`NoopBookmarks`] fallback that reports no bookmarks
//! and ignores every mutation. Consumers never check for a missing store.

use super::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::types::bookmark::{BookmarkedExample, NewBookmark};

/// Stand-in used when no bookmark store is mounted. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBookmarks;

impl BookmarkStoreTrait for NoopBookmarks {
    fn bookmarks(&self) -> &[BookmarkedExample] {
        &[]
    }

    fn add_bookmark(&mut self, _bookmark: NewBookmark) {}

    fn remove_bookmark(&mut self, _cheat_sheet_id: &str, _section_id: &str, _example_title: &str) {}

    fn is_bookmarked(&self, _cheat_sheet_id: &str, _section_id: &str, _example_title: &str) -> bool {
        false
    }

    fn clear_all_bookmarks(&mut self) {}
}

/// Handle returned by [`use_bookmarks`].
pub enum BookmarkAccessor<'a> {
    Live(&'a mut BookmarkStore),
    Detached(NoopBookmarks),
}

impl BookmarkAccessor<'_> {
    /// True when backed by a mounted store.
    pub fn is_live(&self) -> bool {
        matches!(self, BookmarkAccessor::Live(_))
    }
}

/// Selects the live store if one is mounted, the no-op fallback otherwise.
pub fn use_bookmarks(store: Option<&mut BookmarkStore>) -> BookmarkAccessor<'_> {
    match store {
        Some(store) => BookmarkAccessor::Live(store),
        None => BookmarkAccessor::Detached(NoopBookmarks),
    }
}

impl BookmarkStoreTrait for BookmarkAccessor<'_> {
    fn bookmarks(&self) -> &[BookmarkedExample] {
        match self {
            BookmarkAccessor::Live(store) => store.bookmarks(),
            BookmarkAccessor::Detached(noop) => noop.bookmarks(),
        }
    }

    fn add_bookmark(&mut self, bookmark: NewBookmark) {
        match self {
            BookmarkAccessor::Live(store) => store.add_bookmark(bookmark),
            BookmarkAccessor::Detached(noop) => noop.add_bookmark(bookmark),
        }
    }

    fn remove_bookmark(&mut self, cheat_sheet_id: &str, section_id: &str, example_title: &str) {
        match self {
            BookmarkAccessor::Live(store) => {
                store.remove_bookmark(cheat_sheet_id, section_id, example_title)
            }
            BookmarkAccessor::Detached(noop) => {
                noop.remove_bookmark(cheat_sheet_id, section_id, example_title)
            }
        }
    }

    fn is_bookmarked(&self, cheat_sheet_id: &str, section_id: &str, example_title: &str) -> bool {
        match self {
            BookmarkAccessor::Live(store) => {
                store.is_bookmarked(cheat_sheet_id, section_id, example_title)
            }
            BookmarkAccessor::Detached(noop) => {
                noop.is_bookmarked(cheat_sheet_id, section_id, example_title)
            }
        }
    }

    fn clear_all_bookmarks(&mut self) {
        match self {
            BookmarkAccessor::Live(store) => store.clear_all_bookmarks(),
            BookmarkAccessor::Detached(noop) => noop.clear_all_bookmarks(),
        }
    }
}
