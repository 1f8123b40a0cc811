use std::fmt;

use crate::types::bookmark::{bounded_text, string_value_object};
use crate::types::errors::ValidationError;

const MAX_QUERY_CHARS: usize = 200;

/// Trimmed search text, 1 to 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        bounded_text("SearchQuery", raw, MAX_QUERY_CHARS).map(Self)
    }

    /// The query lower-cased for case-insensitive matching.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

string_value_object!(SearchQuery);
