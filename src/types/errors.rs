use std::fmt;

// === StorageError ===

/// Errors related to the durable key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a stored value.
    SerializationError(String),
    /// The write would exceed the store's size quota.
    QuotaExceeded { key: String, needed: usize, quota: usize },
    /// A file system error occurred.
    IoError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::QuotaExceeded { key, needed, quota } => write!(
                f,
                "Storage quota exceeded writing '{}': {} bytes needed, quota is {}",
                key, needed, quota
            ),
            StorageError::IoError(msg) => write!(f, "Storage I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === ThemeError ===

/// Errors related to theme selection.
#[derive(Debug)]
pub enum ThemeError {
    /// The provided theme name is not a known mode.
    InvalidMode(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidMode(mode) => write!(f, "Invalid theme mode: {}", mode),
        }
    }
}

impl std::error::Error for ThemeError {}

// === ConfigError ===

/// Errors raised while building the application configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    InvalidValue { var: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "Invalid value for {}: {}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
