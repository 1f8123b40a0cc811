//! Application operations.
//!
//! Each use case borrows a repository, validates raw input into value
//! objects (stopping at the first invalid field), then performs a single
//! repository round trip.

pub mod add_bookmark;
pub mod config;
pub mod edit_bookmark;
pub mod fuzzy_finder;
pub mod list_bookmarks;
pub mod remove_bookmark;
pub mod search_bookmarks;
pub mod tag_bookmark;

pub use add_bookmark::{AddBookmark, TitlePolicy};
pub use config::{GetConfig, ListConfig, SetConfig, UnsetConfig};
pub use edit_bookmark::EditBookmark;
pub use fuzzy_finder::{GetFuzzyFinderConfig, SetFuzzyFinderConfig};
pub use list_bookmarks::ListBookmarks;
pub use remove_bookmark::RemoveBookmark;
pub use search_bookmarks::SearchBookmarks;
pub use tag_bookmark::TagBookmark;

use crate::types::bookmark::BookmarkTag;
use crate::types::errors::BookmarkError;

/// Validates every raw tag, reporting all invalid ones together.
fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<BookmarkTag>, BookmarkError> {
    let mut tags = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for value in raw {
        match BookmarkTag::create(value.as_ref()) {
            Ok(tag) => tags.push(tag),
            Err(err) => errors.push(err),
        }
    }
    if errors.is_empty() {
        Ok(tags)
    } else {
        Err(BookmarkError::Validation(errors))
    }
}
