use tracing::debug;

use crate::repositories::BookmarkRepository;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::search::SearchQuery;

/// Case-insensitive substring search over titles, URLs and tags.
pub struct SearchBookmarks<'a, R: BookmarkRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository + ?Sized> SearchBookmarks<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Matches keep the repository's order. No match is an empty `Vec`.
    pub fn execute(&self, query: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let query = SearchQuery::create(query)?;
        let term = query.normalized();

        let matches: Vec<Bookmark> = self
            .repository
            .find_all()?
            .into_iter()
            .filter(|bookmark| matches_term(bookmark, &term))
            .collect();

        debug!(query = %query, count = matches.len(), "search finished");
        Ok(matches)
    }
}

fn matches_term(bookmark: &Bookmark, term: &str) -> bool {
    bookmark.title().value().to_lowercase().contains(term)
        || bookmark.url().value().to_lowercase().contains(term)
        || bookmark
            .tags()
            .iter()
            .any(|tag| tag.value().to_lowercase().contains(term))
}
