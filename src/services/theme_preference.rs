//! Theme Preference — the site-wide dark/light toggle.
//!
//! The chosen mode is stored under [`THEME_STORAGE_KEY`] and, like bookmarks,
//! is only written back once the stored value has been read.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::types::theme::ThemeMode;

/// Key under which the theme mode is stored.
pub const THEME_STORAGE_KEY: &str = "theme";

/// CSS class applied to the document root in dark mode.
pub const DARK_CLASS: &str = "dark";

/// Trait defining the theme preference interface.
pub trait ThemePreferenceTrait {
    fn theme(&self) -> ThemeMode;
    fn set_theme(&mut self, mode: ThemeMode);
    /// Flips between light and dark, returning the new mode.
    fn toggle_theme(&mut self) -> ThemeMode;
    /// Root element class for the current mode, if any.
    fn css_class(&self) -> Option<&'static str>;
}

/// Theme preference backed by a key-value store.
pub struct ThemePreference {
    store: Rc<dyn KeyValueStore>,
    mode: ThemeMode,
    hydrated: bool,
}

impl ThemePreference {
    /// Creates an unhydrated preference starting at `default_mode`.
    pub fn new(store: Rc<dyn KeyValueStore>, default_mode: ThemeMode) -> Self {
        Self {
            store,
            mode: default_mode,
            hydrated: false,
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Reads the stored mode once. Missing or unreadable values keep the current mode.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        match self.store.get_item(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => warn!(error = %e, "ignoring stored theme"),
            },
            Ok(None) => debug!("no stored theme, using {}", self.mode),
            Err(e) => warn!(error = %e, "failed to read stored theme"),
        }
        self.hydrated = true;
    }

    fn persist(&self) {
        if !self.hydrated {
            return;
        }
        if let Err(e) = self.store.set_item(THEME_STORAGE_KEY, self.mode.as_str()) {
            warn!(error = %e, "failed to save theme");
        }
    }
}

impl ThemePreferenceTrait for ThemePreference {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
    }

    fn toggle_theme(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.persist();
        self.mode
    }

    fn css_class(&self) -> Option<&'static str> {
        match self.mode {
            ThemeMode::Dark => Some(DARK_CLASS),
            ThemeMode::Light => None,
        }
    }
}
