// Cheatsheets runtime configuration
// Built from environment variables; every value has a default.

use std::path::PathBuf;

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::theme::ThemeMode;

pub const DATA_DIR_VAR: &str = "CHEATSHEETS_DATA_DIR";
pub const THEME_VAR: &str = "CHEATSHEETS_THEME";
pub const LOG_VAR: &str = "CHEATSHEETS_LOG";

/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE: &str = "cheatsheets.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Theme used when nothing is stored yet.
    pub default_theme: ThemeMode,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: platform::get_data_dir(),
            default_theme: ThemeMode::Light,
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// `RUST_LOG` is consulted when `CHEATSHEETS_LOG` is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(theme) = lookup(THEME_VAR) {
            config.default_theme = theme.parse().map_err(|_| ConfigError::InvalidValue {
                var: THEME_VAR.to_string(),
                value: theme.clone(),
            })?;
        }

        if let Some(filter) = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG")) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
