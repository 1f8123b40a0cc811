use tracing::{info, warn};

use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTag};
use crate::types::errors::BookmarkError;

/// Attaches or detaches a single tag on a stored bookmark.
///
/// A rejected change leaves the stored bookmark untouched.
pub struct TagBookmark<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository + ?Sized> TagBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn add(&self, id: &str, tag: &str) -> Result<Bookmark, BookmarkError> {
        let (existing, tag) = self.load(id, tag)?;
        let updated = existing.add_tag(tag).inspect_err(|e| warn!(id = %existing.id(), "{e}"))?;
        self.repository.save(&updated)?;
        info!(id = %updated.id(), "tag added");
        Ok(updated)
    }

    pub fn remove(&self, id: &str, tag: &str) -> Result<Bookmark, BookmarkError> {
        let (existing, tag) = self.load(id, tag)?;
        let updated = existing
            .remove_tag(&tag)
            .inspect_err(|e| warn!(id = %existing.id(), "{e}"))?;
        self.repository.save(&updated)?;
        info!(id = %updated.id(), "tag removed");
        Ok(updated)
    }

    fn load(&self, id: &str, tag: &str) -> Result<(Bookmark, BookmarkTag), BookmarkError> {
        let id = BookmarkId::create(id)?;
        let tag = BookmarkTag::create(tag)?;
        let existing = self
            .repository
            .find_by_id(&id)?
            .ok_or_else(|| BookmarkError::NotFound(id.value().to_string()))?;
        Ok((existing, tag))
    }
}
