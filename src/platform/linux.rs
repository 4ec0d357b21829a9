// Cheatsheets data path on Linux: $XDG_DATA_HOME/cheatsheets or ~/.local/share/cheatsheets

use std::env;
use std::path::PathBuf;

pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("cheatsheets")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("cheatsheets")
    }
}
