// Cheatsheets data path on Windows: %APPDATA%/Cheatsheets

use std::env;
use std::path::PathBuf;

pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Cheatsheets")
}
