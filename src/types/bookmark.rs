//! Bookmark value objects and the `Bookmark` entity.
//!
//! Value objects can only be obtained through their `create` factories, so a
//! `BookmarkTitle` (or any sibling type) in hand is always valid.

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::types::errors::{BookmarkError, ValidationError};
use crate::types::timestamp;

const MAX_TITLE_CHARS: usize = 500;
const MAX_TAG_CHARS: usize = 50;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

/// Implements `value`, `Display` and `AsRef<str>` for a string newtype.
macro_rules! string_value_object {
    ($name:ident) => {
        impl $name {
            /// Returns the validated string.
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use string_value_object;

/// Trims `raw` and checks it is non-empty and at most `max` characters.
pub(crate) fn bounded_text(
    field: &'static str,
    raw: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

// === BookmarkId ===

/// UUID-shaped bookmark identifier (hex groups 8-4-4-4-12, any case).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkId(String);

impl BookmarkId {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        if !UUID_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidFormat {
                field: "BookmarkId",
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Generates a fresh random v4 identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

string_value_object!(BookmarkId);

// === BookmarkTitle ===

/// Trimmed title, 1 to 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        bounded_text("BookmarkTitle", raw, MAX_TITLE_CHARS).map(Self)
    }
}

string_value_object!(BookmarkTitle);

// === BookmarkUrl ===

/// Trimmed absolute URL with an `http` or `https` scheme.
///
/// The trimmed input is stored as typed, not in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkUrl(String);

impl BookmarkUrl {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "BookmarkUrl",
            });
        }

        let parsed = Url::parse(trimmed).map_err(|_| ValidationError::InvalidFormat {
            field: "BookmarkUrl",
            value: trimmed.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_string())),
            other => Err(ValidationError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }
}

string_value_object!(BookmarkUrl);

// === BookmarkTag ===

/// Trimmed tag, 1 to 50 characters. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkTag(String);

impl BookmarkTag {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        bounded_text("BookmarkTag", raw, MAX_TAG_CHARS).map(Self)
    }
}

string_value_object!(BookmarkTag);

// === Bookmark ===

/// A saved bookmark.
///
/// Equality is entity identity: two bookmarks are equal when their IDs are,
/// whatever their other fields hold. Mutations return a new value and leave
/// `self` untouched.
#[derive(Debug, Clone)]
pub struct Bookmark {
    id: BookmarkId,
    title: BookmarkTitle,
    url: BookmarkUrl,
    tags: Vec<BookmarkTag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a new bookmark stamped with the current time.
    ///
    /// Fails with `DuplicateTag` if `tags` repeats a value.
    pub fn create(
        id: BookmarkId,
        title: BookmarkTitle,
        url: BookmarkUrl,
        tags: Vec<BookmarkTag>,
    ) -> Result<Self, BookmarkError> {
        let now = timestamp::now();
        Self::restore(id, title, url, tags, now, now)
    }

    /// Rebuilds a bookmark from stored fields, keeping its timestamps.
    pub fn restore(
        id: BookmarkId,
        title: BookmarkTitle,
        url: BookmarkUrl,
        tags: Vec<BookmarkTag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, BookmarkError> {
        if let Some(duplicate) = first_duplicate(&tags) {
            return Err(BookmarkError::DuplicateTag(duplicate.to_string()));
        }
        Ok(Self {
            id,
            title,
            url,
            tags,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &BookmarkId {
        &self.id
    }

    pub fn title(&self) -> &BookmarkTitle {
        &self.title
    }

    pub fn url(&self) -> &BookmarkUrl {
        &self.url
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> &[BookmarkTag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_tag(&self, tag: &BookmarkTag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns a copy with `tag` appended.
    pub fn add_tag(&self, tag: BookmarkTag) -> Result<Self, BookmarkError> {
        if self.has_tag(&tag) {
            return Err(BookmarkError::DuplicateTag(tag.value().to_string()));
        }
        let mut tags = self.tags.clone();
        tags.push(tag);
        self.touched(self.title.clone(), self.url.clone(), tags)
    }

    /// Returns a copy without `tag`.
    pub fn remove_tag(&self, tag: &BookmarkTag) -> Result<Self, BookmarkError> {
        if !self.has_tag(tag) {
            return Err(BookmarkError::TagNotFound(tag.value().to_string()));
        }
        let tags = self.tags.iter().filter(|t| *t != tag).cloned().collect();
        self.touched(self.title.clone(), self.url.clone(), tags)
    }

    /// Returns a copy with title, URL and tags replaced.
    pub fn with_details(
        &self,
        title: BookmarkTitle,
        url: BookmarkUrl,
        tags: Vec<BookmarkTag>,
    ) -> Result<Self, BookmarkError> {
        if let Some(duplicate) = first_duplicate(&tags) {
            return Err(BookmarkError::DuplicateTag(duplicate.to_string()));
        }
        self.touched(title, url, tags)
    }

    fn touched(
        &self,
        title: BookmarkTitle,
        url: BookmarkUrl,
        tags: Vec<BookmarkTag>,
    ) -> Result<Self, BookmarkError> {
        Ok(Self {
            id: self.id.clone(),
            title,
            url,
            tags,
            created_at: self.created_at,
            updated_at: timestamp::advance("updatedAt", self.updated_at)?,
        })
    }
}

impl PartialEq for Bookmark {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bookmark {}

fn first_duplicate(tags: &[BookmarkTag]) -> Option<&str> {
    tags.iter()
        .enumerate()
        .find(|(i, tag)| tags[..*i].contains(tag))
        .map(|(_, tag)| tag.value())
}
