use tracing::info;

use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTitle, BookmarkUrl};
use crate::types::errors::BookmarkError;
use crate::usecases::parse_tags;

/// Replaces the title, URL and tags of an existing bookmark.
pub struct EditBookmark<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository + ?Sized> EditBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// `createdAt` is kept; `updatedAt` moves strictly forward.
    pub fn execute<S: AsRef<str>>(
        &self,
        id: &str,
        url: &str,
        title: &str,
        tags: &[S],
    ) -> Result<Bookmark, BookmarkError> {
        let id = BookmarkId::create(id)?;
        let title = BookmarkTitle::create(title)?;
        let url = BookmarkUrl::create(url)?;
        let tags = parse_tags(tags)?;

        let existing = self
            .repository
            .find_by_id(&id)?
            .ok_or_else(|| BookmarkError::NotFound(id.value().to_string()))?;

        let updated = existing.with_details(title, url, tags)?;
        self.repository.save(&updated)?;
        info!(id = %updated.id(), "bookmark edited");
        Ok(updated)
    }
}
