// bkm data path for macOS
// Data: ~/Library/Application Support/bkm

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the data directory for bkm on macOS.
/// `~/Library/Application Support/bkm`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("bkm")
}
