// Cheatsheets platform abstraction
// Resolves where the durable store lives on Windows, macOS, and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for Cheatsheets.
///
/// - **Linux**: `~/.local/share/cheatsheets` (or `$XDG_DATA_HOME/cheatsheets`)
/// - **macOS**: `~/Library/Application Support/Cheatsheets`
/// - **Windows**: `%APPDATA%/Cheatsheets`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
