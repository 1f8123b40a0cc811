use tracing::{info, warn};

use crate::repositories::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTitle, BookmarkUrl};
use crate::types::errors::BookmarkError;
use crate::usecases::parse_tags;

/// Whether `AddBookmark` accepts a title that another bookmark already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePolicy {
    #[default]
    AllowDuplicates,
    RejectDuplicates,
}

impl TitlePolicy {
    /// Reads the `bookmark.uniqueTitles` config value.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("true") => TitlePolicy::RejectDuplicates,
            _ => TitlePolicy::AllowDuplicates,
        }
    }
}

/// Creates and stores a new bookmark.
pub struct AddBookmark<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
    title_policy: TitlePolicy,
}

impl<'a, R: BookmarkRepository + ?Sized> AddBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            title_policy: TitlePolicy::default(),
        }
    }

    pub fn with_title_policy(mut self, title_policy: TitlePolicy) -> Self {
        self.title_policy = title_policy;
        self
    }

    /// Returns the stored bookmark with its generated ID.
    pub fn execute<S: AsRef<str>>(
        &self,
        url: &str,
        title: &str,
        tags: &[S],
    ) -> Result<Bookmark, BookmarkError> {
        let title = BookmarkTitle::create(title)?;
        let url = BookmarkUrl::create(url)?;
        let tags = parse_tags(tags)?;
        let bookmark = Bookmark::create(BookmarkId::generate(), title, url, tags)?;

        if self.title_policy == TitlePolicy::RejectDuplicates {
            let taken = self
                .repository
                .find_all()?
                .iter()
                .any(|existing| existing.title() == bookmark.title());
            if taken {
                warn!(title = %bookmark.title(), "rejected duplicate bookmark title");
                return Err(BookmarkError::DuplicateTitle(bookmark.title().value().to_string()));
            }
        }

        self.repository.save(&bookmark)?;
        info!(id = %bookmark.id(), "bookmark added");
        Ok(bookmark)
    }
}
