// Cheatsheets data path on macOS: ~/Library/Application Support/Cheatsheets

use std::env;
use std::path::PathBuf;

pub fn get_data_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Cheatsheets")
}
