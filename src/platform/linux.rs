// bkm data path for Linux
// Data: ~/.local/share/bkm

use std::env;
use std::path::PathBuf;

/// Returns the data directory for bkm on Linux.
/// Uses `$XDG_DATA_HOME/bkm` if set, otherwise `~/.local/share/bkm`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_data_home.filter(|xdg| !xdg.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("bkm"),
        None => {
            let home = home.unwrap_or_else(|| String::from("/tmp"));
            PathBuf::from(home).join(".local").join("share").join("bkm")
        }
    }
}
