use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkTag};
use crate::types::errors::BookmarkError;

/// Lists every bookmark, or only those carrying one tag.
pub struct ListBookmarks<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository + ?Sized> ListBookmarks<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, tag: Option<&str>) -> Result<Vec<Bookmark>, BookmarkError> {
        match tag {
            Some(raw) => {
                let tag = BookmarkTag::create(raw)?;
                Ok(self.repository.find_by_tag(&tag)?)
            }
            None => Ok(self.repository.find_all()?),
        }
    }
}
