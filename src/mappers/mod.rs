//! Conversion between stored records and validated domain values.
//!
//! `to_domain` validates every field independently and returns all failures
//! together; `to_dto` is total.

pub mod bookmark_mapper;
pub mod config_mapper;

pub use bookmark_mapper::BookmarkMapper;
pub use config_mapper::ConfigMapper;

use crate::types::errors::ValidationError;

/// Moves a failure into `errors` and keeps going.
fn collect<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
