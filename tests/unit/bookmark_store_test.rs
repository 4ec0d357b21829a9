//! Unit tests for the BookmarkStore public API.
//!
//! These tests exercise add/remove/query/clear through `BookmarkStoreTrait`,
//! the hydration lifecycle, and persistence across simulated restarts, using
//! a shared in-memory key-value store.

use std::rc::Rc;

use cheatsheets::managers::bookmark_persistence::{BookmarkPersistence, BOOKMARKS_STORAGE_KEY};
use cheatsheets::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait, HydrationState};
use cheatsheets::storage::{KeyValueStore, MemoryStore, SqliteStore};
use cheatsheets::types::bookmark::{BookmarkedExample, NewBookmark};
use tempfile::TempDir;

/// Helper: a hydrated store over `backing`.
fn mounted(backing: &MemoryStore) -> BookmarkStore {
    let mut store = BookmarkStore::new(BookmarkPersistence::new(Rc::new(backing.clone())));
    store.hydrate();
    store
}

fn python_variables() -> NewBookmark {
    NewBookmark::new("python", "basics", "Variables and Data Types")
}

fn git_branches() -> NewBookmark {
    NewBookmark::new("git", "branching", "Branch Operations")
}

/// Scenarios 1 through 4: add, add, remove, clear.
#[test]
fn test_add_add_remove_clear_sequence() {
    let backing = MemoryStore::new();
    let mut store = mounted(&backing);

    store.add_bookmark(python_variables());
    assert_eq!(store.bookmarks().len(), 1);
    assert!(store.is_bookmarked("python", "basics", "Variables and Data Types"));

    store.add_bookmark(git_branches());
    assert_eq!(store.bookmarks().len(), 2);
    assert_eq!(store.bookmarks()[0].cheat_sheet_id, "python");
    assert_eq!(store.bookmarks()[1].cheat_sheet_id, "git");

    store.remove_bookmark("python", "basics", "Variables and Data Types");
    assert_eq!(store.bookmarks().len(), 1);
    assert_eq!(store.bookmarks()[0].example_title, "Branch Operations");
    assert!(!store.is_bookmarked("python", "basics", "Variables and Data Types"));

    store.clear_all_bookmarks();
    assert!(store.bookmarks().is_empty());
    assert!(!store.is_bookmarked("git", "branching", "Branch Operations"));
}

/// Scenario 5: a persisted collection survives a restart unchanged.
#[test]
fn test_restart_restores_persisted_collection() {
    let backing = MemoryStore::new();
    let persisted = vec![BookmarkedExample {
        cheat_sheet_id: "docker".to_string(),
        section_id: "basics".to_string(),
        example_title: "Run Your First Container".to_string(),
        timestamp: 1000,
    }];
    BookmarkPersistence::new(Rc::new(backing.clone()))
        .try_save(&persisted)
        .unwrap();

    let store = mounted(&backing);
    assert_eq!(store.bookmarks(), persisted.as_slice());
}

/// Scenario 6: corrupted stored text yields an empty, hydrated store.
#[test]
fn test_corrupted_storage_hydrates_empty() {
    let backing = MemoryStore::new();
    backing.set_item(BOOKMARKS_STORAGE_KEY, "{not json").unwrap();

    let store = mounted(&backing);
    assert_eq!(store.state(), HydrationState::Hydrated);
    assert!(store.bookmarks().is_empty());
}

/// The first mutation after hydrating over corrupt data overwrites it.
#[test]
fn test_write_after_corruption_replaces_bad_value() {
    let backing = MemoryStore::new();
    backing.set_item(BOOKMARKS_STORAGE_KEY, "garbage").unwrap();
    let mut store = mounted(&backing);

    store.add_bookmark(git_branches());

    let restarted = mounted(&backing);
    assert_eq!(restarted.bookmarks().len(), 1);
}

/// Mutations before hydration must not reach durable storage.
#[test]
fn test_no_write_before_hydration() {
    let backing = MemoryStore::new();
    let existing = vec![NewBookmark::new("fastapi", "routing", "Path Parameters").into_record(42)];
    BookmarkPersistence::new(Rc::new(backing.clone()))
        .try_save(&existing)
        .unwrap();
    let before = backing.get_item(BOOKMARKS_STORAGE_KEY).unwrap();

    let mut store = BookmarkStore::new(BookmarkPersistence::new(Rc::new(backing.clone())));
    store.clear_all_bookmarks();
    store.add_bookmark(python_variables());
    assert_eq!(store.bookmarks().len(), 1, "mutations apply in memory immediately");
    assert_eq!(backing.get_item(BOOKMARKS_STORAGE_KEY).unwrap(), before);

    store.hydrate();
    assert_eq!(store.bookmarks(), existing.as_slice(), "stored data wins at hydration");
    assert_eq!(backing.get_item(BOOKMARKS_STORAGE_KEY).unwrap(), before);
}

/// Adding the same triple twice keeps both records; one remove deletes both.
#[test]
fn test_duplicates_are_kept_and_removed_together() {
    let mut store = mounted(&MemoryStore::new());
    store.add_bookmark(python_variables());
    store.add_bookmark(python_variables());
    assert_eq!(store.bookmarks().len(), 2);

    store.remove_bookmark("python", "basics", "Variables and Data Types");
    assert!(store.bookmarks().is_empty());
}

/// Removing a triple that is not present changes nothing.
#[test]
fn test_remove_missing_is_noop() {
    let mut store = mounted(&MemoryStore::new());
    store.add_bookmark(git_branches());
    store.remove_bookmark("git", "branching", "branch operations");
    store.remove_bookmark("git", "branching", "branch operations");
    assert_eq!(store.bookmarks().len(), 1);
}

/// A failed write (quota exceeded) is swallowed and memory is unaffected.
#[test]
fn test_quota_exceeded_is_recovered_locally() {
    let backing = MemoryStore::with_quota(64);
    let mut store = mounted(&backing);

    store.add_bookmark(NewBookmark::new("openai", "chat", "A very long example title that overflows the quota"));
    assert_eq!(store.bookmarks().len(), 1);
    assert!(backing.get_item(BOOKMARKS_STORAGE_KEY).unwrap().is_none());
}

/// The SQLite-backed store keeps bookmarks across reopening the database file.
#[test]
fn test_sqlite_store_persists_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cheatsheets.db");

    {
        let backing: Rc<dyn KeyValueStore> = Rc::new(SqliteStore::open(&path).unwrap());
        let mut store = BookmarkStore::new(BookmarkPersistence::new(backing));
        store.hydrate();
        store.add_bookmark(python_variables());
        store.add_bookmark(git_branches());
    }

    let backing: Rc<dyn KeyValueStore> = Rc::new(SqliteStore::open(&path).unwrap());
    let mut store = BookmarkStore::new(BookmarkPersistence::new(backing));
    store.hydrate();
    let titles: Vec<&str> = store.bookmarks().iter().map(|b| b.example_title.as_str()).collect();
    assert_eq!(titles, vec!["Variables and Data Types", "Branch Operations"]);
}
