use std::io;
use std::path::PathBuf;

use thiserror::Error;

// === ValidationError ===

/// A single broken rule reported by a value-object factory or a mapper.
///
/// `field` is the name of the value type that rejected the input, so the
/// rendered message always says which rule was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    /// The trimmed input exceeded the maximum length in characters.
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
    /// The input did not match the required shape.
    #[error("Invalid {field} format: {value}")]
    InvalidFormat { field: &'static str, value: String },
    /// A URL parsed but used a scheme other than http/https.
    #[error("Invalid protocol: {scheme}:. Only http and https are allowed")]
    UnsupportedScheme { scheme: String },
    /// The input contained shell metacharacters.
    #[error("{field} contains forbidden characters: {value}")]
    ForbiddenCharacters { field: &'static str, value: String },
    /// The input matched a shell-injection deny-list entry.
    #[error("Dangerous {field} pattern detected: {value}")]
    DangerousPattern { field: &'static str, value: String },
    /// A stored timestamp could not be parsed.
    #[error("Invalid date for {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
    /// Moving a timestamp forward would pass the last representable year.
    #[error("{field} cannot advance past {value}")]
    TimestampOverflow { field: &'static str, value: String },
    /// `createdAt` was later than `updatedAt`.
    #[error("createdAt ({created_at}) is later than updatedAt ({updated_at})")]
    TimestampOrder {
        created_at: String,
        updated_at: String,
    },
    /// The same tag value appeared twice in one record.
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),
}

// === RepositoryError ===

/// Errors raised by the JSON file repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading, writing or creating the data directory failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but is not a JSON array of records.
    #[error("Malformed data file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A stored record failed validation while being loaded.
    #[error("Invalid record at index {index}: {}", join_messages(.errors))]
    InvalidRecord {
        index: usize,
        errors: Vec<ValidationError>,
    },
    /// No record matched the requested key.
    #[error("Record not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RepositoryError::Io {
            path: path.into(),
            source,
        }
    }
}

// === BookmarkError ===

/// Errors returned by bookmark entity operations and bookmark use cases.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// One or more inputs failed validation.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    /// No bookmark with the given ID exists.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// The tag is already attached to the bookmark.
    #[error("Tag already exists: {0}")]
    DuplicateTag(String),
    /// The tag is not attached to the bookmark.
    #[error("Tag does not exist: {0}")]
    TagNotFound(String),
    /// Another bookmark already uses this title.
    #[error("A bookmark titled '{0}' already exists")]
    DuplicateTitle(String),
    /// The bookmark file could not be read or written.
    #[error(transparent)]
    Storage(RepositoryError),
}

impl BookmarkError {
    /// One human-readable line per failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            BookmarkError::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl From<ValidationError> for BookmarkError {
    fn from(err: ValidationError) -> Self {
        BookmarkError::Validation(vec![err])
    }
}

impl From<RepositoryError> for BookmarkError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => BookmarkError::NotFound(id),
            other => BookmarkError::Storage(other),
        }
    }
}

// === ConfigError ===

/// Errors returned by configuration use cases.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more inputs (or stored values) failed validation.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    /// No entry exists for the given key.
    #[error("Config not found: {0}")]
    NotFound(String),
    /// The config file could not be read or written.
    #[error(transparent)]
    Storage(RepositoryError),
}

impl ConfigError {
    /// One human-readable line per failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ConfigError::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation(vec![err])
    }
}

impl From<RepositoryError> for ConfigError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(key) => ConfigError::NotFound(key),
            other => ConfigError::Storage(other),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
