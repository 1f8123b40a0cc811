// bkm data path for Windows
// Data: %APPDATA%/bkm

use std::env;
use std::path::PathBuf;

/// Returns the data directory for bkm on Windows.
/// `%APPDATA%/bkm`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("bkm")
}
