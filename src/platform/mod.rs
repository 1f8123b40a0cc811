// bkm platform abstraction
// Resolves where bookmarks.json and config.json live on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific default at compile time.

use std::env;
use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BKM_DATA_DIR";

/// Returns the platform-specific default data directory for bkm.
///
/// - **Linux**: `~/.local/share/bkm` (or `$XDG_DATA_HOME/bkm`)
/// - **macOS**: `~/Library/Application Support/bkm`
/// - **Windows**: `%APPDATA%/bkm`
pub fn default_data_dir() -> PathBuf {
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

/// Picks the data directory: explicit flag, then `BKM_DATA_DIR`, then the
/// platform default.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    let from_env = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    choose_data_dir(explicit, from_env, default_data_dir)
}

fn choose_data_dir(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    default: impl FnOnce() -> PathBuf,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match from_env {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => default(),
    }
}
