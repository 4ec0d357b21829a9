//! Unit tests for the RPC handler — all JSON-RPC methods dispatched by `handle_method`.
//!
//! These tests exercise every method through the same code path used by the
//! `cheatsheets-rpc` binary, using a temporary on-disk SQLite store.

use std::rc::Rc;

use serde_json::json;
use tempfile::TempDir;

use cheatsheets::app::App;
use cheatsheets::config::AppConfig;
use cheatsheets::rpc_handler::handle_method;
use cheatsheets::storage::MemoryStore;
use cheatsheets::types::theme::ThemeMode;

/// Create a started App backed by a temp directory.
fn setup() -> (App, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig {
        data_dir: tmp.path().join("data"),
        default_theme: ThemeMode::Light,
        log_filter: "warn".to_string(),
    };
    let mut app = App::new(&config).expect("Failed to init App");
    app.startup();
    (app, tmp)
}

fn python_params() -> serde_json::Value {
    json!({
        "cheatSheetId": "python",
        "sectionId": "basics",
        "exampleTitle": "Variables and Data Types"
    })
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (mut app, _tmp) = setup();
    let res = handle_method(&mut app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Bookmarks ───

#[test]
fn test_bookmark_add_list_remove() {
    let (mut app, _tmp) = setup();

    let res = handle_method(&mut app, "bookmark.add", &python_params()).unwrap();
    assert_eq!(res["count"], 1);

    let res = handle_method(&mut app, "bookmark.is_bookmarked", &python_params()).unwrap();
    assert_eq!(res["bookmarked"], true);

    let list = handle_method(&mut app, "bookmark.list", &json!({})).unwrap();
    assert_eq!(list["live"], true);
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["cheatSheetId"], "python");
    assert!(items[0]["timestamp"].as_i64().unwrap() > 0);

    let res = handle_method(&mut app, "bookmark.remove", &python_params()).unwrap();
    assert_eq!(res["count"], 0);
    let res = handle_method(&mut app, "bookmark.is_bookmarked", &python_params()).unwrap();
    assert_eq!(res["bookmarked"], false);
}

#[test]
fn test_bookmark_clear() {
    let (mut app, _tmp) = setup();
    handle_method(&mut app, "bookmark.add", &python_params()).unwrap();
    handle_method(&mut app, "bookmark.clear", &json!({})).unwrap();
    let list = handle_method(&mut app, "bookmark.list", &json!({})).unwrap();
    assert!(list["items"].as_array().unwrap().is_empty());
}

#[test]
fn test_bookmark_add_missing_params() {
    let (mut app, _tmp) = setup();
    let err = handle_method(
        &mut app,
        "bookmark.add",
        &json!({"cheatSheetId": "git", "sectionId": "basics"}),
    )
    .unwrap_err();
    assert_eq!(err, "missing exampleTitle");
}

#[test]
fn test_bookmarks_survive_app_restart() {
    let tmp = TempDir::new().unwrap();
    let config = AppConfig {
        data_dir: tmp.path().to_path_buf(),
        default_theme: ThemeMode::Light,
        log_filter: "warn".to_string(),
    };
    {
        let mut app = App::new(&config).unwrap();
        app.startup();
        handle_method(&mut app, "bookmark.add", &python_params()).unwrap();
    }
    let mut app = App::new(&config).unwrap();
    app.startup();
    let res = handle_method(&mut app, "bookmark.is_bookmarked", &python_params()).unwrap();
    assert_eq!(res["bookmarked"], true);
}

#[test]
fn test_bookmark_methods_without_store_use_fallback() {
    let mut app = App::without_bookmarks(Rc::new(MemoryStore::new()), ThemeMode::Light);
    app.startup();

    let res = handle_method(&mut app, "bookmark.add", &python_params()).unwrap();
    assert_eq!(res["count"], 0);
    let res = handle_method(&mut app, "bookmark.is_bookmarked", &python_params()).unwrap();
    assert_eq!(res["bookmarked"], false);
    let list = handle_method(&mut app, "bookmark.list", &json!({})).unwrap();
    assert_eq!(list["live"], false);
    assert!(list["items"].as_array().unwrap().is_empty());
    assert!(handle_method(&mut app, "bookmark.clear", &json!({})).is_ok());
}

// ─── Theme ───

#[test]
fn test_theme_get_toggle_set() {
    let (mut app, _tmp) = setup();

    let res = handle_method(&mut app, "theme.get", &json!({})).unwrap();
    assert_eq!(res, json!({"theme": "light", "cssClass": null}));

    let res = handle_method(&mut app, "theme.toggle", &json!({})).unwrap();
    assert_eq!(res, json!({"theme": "dark", "cssClass": "dark"}));

    let res = handle_method(&mut app, "theme.set", &json!({"theme": "light"})).unwrap();
    assert_eq!(res["theme"], "light");
}

#[test]
fn test_theme_set_invalid() {
    let (mut app, _tmp) = setup();
    let err = handle_method(&mut app, "theme.set", &json!({"theme": "neon"})).unwrap_err();
    assert_eq!(err, "Invalid theme mode: neon");
}
