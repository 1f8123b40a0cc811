//! Bookmark repository backed by `bookmarks.json`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::mappers::BookmarkMapper;
use crate::repositories::json_file::JsonArrayFile;
use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTag};
use crate::types::dto::BookmarkDto;
use crate::types::errors::RepositoryError;

/// File name of the bookmark store inside the data directory.
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Stores bookmarks as a JSON array of `BookmarkDto`.
pub struct FileBookmarkRepository {
    file: JsonArrayFile,
}

impl FileBookmarkRepository {
    /// Creates a repository rooted at `data_dir`. Nothing is touched on disk
    /// until the first call.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonArrayFile::new(data_dir, BOOKMARKS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load(&self) -> Result<Vec<BookmarkDto>, RepositoryError> {
        self.file.load()
    }

    fn restore(index: usize, dto: &BookmarkDto) -> Result<Bookmark, RepositoryError> {
        BookmarkMapper::to_domain(dto).map_err(|errors| RepositoryError::InvalidRecord { index, errors })
    }
}

impl BookmarkRepository for FileBookmarkRepository {
    fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        let mut records = self.load()?;
        for (index, dto) in records.iter().enumerate() {
            Self::restore(index, dto)?;
        }

        let dto = BookmarkMapper::to_dto(bookmark);
        match records.iter().position(|r| r.id == dto.id) {
            Some(index) => {
                debug!(id = %dto.id, index, "replacing bookmark");
                records[index] = dto;
            }
            None => {
                debug!(id = %dto.id, "appending bookmark");
                records.push(dto);
            }
        }

        self.file.store(&records)
    }

    fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, RepositoryError> {
        let records = self.load()?;
        records
            .iter()
            .enumerate()
            .find(|(_, r)| r.id == id.value())
            .map(|(index, dto)| Self::restore(index, dto))
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        self.load()?
            .iter()
            .enumerate()
            .map(|(index, dto)| Self::restore(index, dto))
            .collect()
    }

    fn find_by_tag(&self, tag: &BookmarkTag) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|b| b.has_tag(tag))
            .collect())
    }

    fn remove(&self, id: &BookmarkId) -> Result<(), RepositoryError> {
        let mut records = self.load()?;
        let index = records
            .iter()
            .position(|r| r.id == id.value())
            .ok_or_else(|| RepositoryError::NotFound(id.value().to_string()))?;

        records.remove(index);
        debug!(id = %id, index, "removed bookmark");
        self.file.store(&records)
    }
}
