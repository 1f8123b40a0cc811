//! Whole-file JSON array storage shared by the file repositories.
//!
//! Every call reads or rewrites the complete file. There is no locking and
//! no temp-file rename, so concurrent writers race and the last one wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::types::errors::RepositoryError;

/// A JSON file holding one array of records inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonArrayFile {
    dir: PathBuf,
    path: PathBuf,
}

impl JsonArrayFile {
    pub fn new(dir: impl Into<PathBuf>, file_name: &str) -> Self {
        let dir = dir.into();
        let path = dir.join(file_name);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record.
    ///
    /// A missing or blank file reads as an empty array.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepositoryError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Malformed {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Overwrites the file with `records`, creating the directory first.
    pub fn store<T: Serialize>(&self, records: &[T]) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir).map_err(|e| RepositoryError::io(&self.dir, e))?;

        let json = serde_json::to_string_pretty(records).map_err(|e| RepositoryError::Malformed {
            path: self.path.clone(),
            source: e,
        })?;

        fs::write(&self.path, json).map_err(|e| RepositoryError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = records.len(), "stored records");
        Ok(())
    }
}
