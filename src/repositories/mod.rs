//! Persistence boundary.
//!
//! The traits are what use cases depend on; the `File*` types implement them
//! on top of one JSON array file each.

pub mod file_bookmark_repository;
pub mod file_config_repository;
pub mod json_file;

pub use file_bookmark_repository::FileBookmarkRepository;
pub use file_config_repository::FileConfigRepository;

use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTag};
use crate::types::config::{ConfigEntry, ConfigKey};
use crate::types::errors::RepositoryError;

/// Trait defining bookmark persistence operations.
pub trait BookmarkRepository {
    /// Inserts the bookmark, or replaces the stored one with the same ID in place.
    fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;
    /// Returns `Ok(None)` when no bookmark has this ID.
    fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, RepositoryError>;
    /// All bookmarks in file order. Fails if any stored record is invalid.
    fn find_all(&self) -> Result<Vec<Bookmark>, RepositoryError>;
    fn find_by_tag(&self, tag: &BookmarkTag) -> Result<Vec<Bookmark>, RepositoryError>;
    /// Fails with `NotFound` when no bookmark has this ID.
    fn remove(&self, id: &BookmarkId) -> Result<(), RepositoryError>;
}

/// Trait defining key-value configuration persistence.
pub trait ConfigRepository {
    /// Returns `Ok(None)` when the key is unset.
    fn get(&self, key: &ConfigKey) -> Result<Option<String>, RepositoryError>;
    /// Upserts the value and stamps it with the current time. Fails without
    /// writing if any stored entry is invalid.
    fn set(&self, key: &ConfigKey, value: &str) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when the key is unset.
    fn remove(&self, key: &ConfigKey) -> Result<(), RepositoryError>;
    /// All entries in file order. Fails if any stored entry is invalid.
    fn get_all(&self) -> Result<Vec<ConfigEntry>, RepositoryError>;
}
