//! RPC method handler for the Cheatsheets JSON-RPC bridge.
//!
//! Kept separate from `rpc_server.rs` so it can be unit-tested directly.
//! `handle_method` dispatches a method call to the bookmark accessor or the
//! theme preference of an [`App`].

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::services::theme_preference::ThemePreferenceTrait;
use crate::types::bookmark::NewBookmark;
use crate::types::errors::ThemeError;
use crate::types::theme::ThemeMode;

/// Reads a required string parameter.
fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

/// Reads the bookmark triple from `params`.
fn triple(params: &Value) -> Result<(&str, &str, &str), String> {
    Ok((
        str_param(params, "cheatSheetId")?,
        str_param(params, "sectionId")?,
        str_param(params, "exampleTitle")?,
    ))
}

fn theme_json(app: &App) -> Value {
    json!({"theme": app.theme.theme(), "cssClass": app.theme.css_class()})
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.add" => {
            let (c, s, t) = triple(params)?;
            let mut bookmarks = app.bookmarks();
            bookmarks.add_bookmark(NewBookmark::new(c, s, t));
            Ok(json!({"ok": true, "count": bookmarks.bookmarks().len()}))
        }
        "bookmark.remove" => {
            let (c, s, t) = triple(params)?;
            let mut bookmarks = app.bookmarks();
            bookmarks.remove_bookmark(c, s, t);
            Ok(json!({"ok": true, "count": bookmarks.bookmarks().len()}))
        }
        "bookmark.is_bookmarked" => {
            let (c, s, t) = triple(params)?;
            Ok(json!({"bookmarked": app.bookmarks().is_bookmarked(c, s, t)}))
        }
        "bookmark.list" => {
            let bookmarks = app.bookmarks();
            let items = serde_json::to_value(bookmarks.bookmarks()).map_err(|e| e.to_string())?;
            Ok(json!({"items": items, "live": bookmarks.is_live()}))
        }
        "bookmark.clear" => {
            app.bookmarks().clear_all_bookmarks();
            Ok(json!({"ok": true}))
        }

        // ─── Theme ───
        "theme.get" => Ok(theme_json(app)),
        "theme.set" => {
            let mode: ThemeMode = str_param(params, "theme")?
                .parse()
                .map_err(|e: ThemeError| e.to_string())?;
            app.theme.set_theme(mode);
            Ok(theme_json(app))
        }
        "theme.toggle" => {
            app.theme.toggle_theme();
            Ok(theme_json(app))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
