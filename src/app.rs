//! App core for bkm.
//!
//! Owns the repositories for one data directory. Use cases are created on
//! demand because they borrow a repository for the duration of one call.

use std::path::{Path, PathBuf};

use crate::repositories::{FileBookmarkRepository, FileConfigRepository};

/// Central application struct holding the file-backed repositories.
pub struct App {
    data_dir: PathBuf,
    pub bookmarks: FileBookmarkRepository,
    pub config: FileConfigRepository,
}

impl App {
    /// Creates an app rooted at `data_dir`. Files are created lazily on the
    /// first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            bookmarks: FileBookmarkRepository::new(&data_dir),
            config: FileConfigRepository::new(&data_dir),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
