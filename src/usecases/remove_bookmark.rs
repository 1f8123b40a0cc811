use tracing::info;

use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::BookmarkError;

/// Deletes a bookmark that must exist.
pub struct RemoveBookmark<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository + ?Sized> RemoveBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Returns the bookmark as it was before removal.
    pub fn execute(&self, id: &str) -> Result<Bookmark, BookmarkError> {
        let id = BookmarkId::create(id)?;

        let existing = self
            .repository
            .find_by_id(&id)?
            .ok_or_else(|| BookmarkError::NotFound(id.value().to_string()))?;

        self.repository.remove(&id)?;
        info!(id = %id, "bookmark removed");
        Ok(existing)
    }
}
