//! Configuration repository backed by `config.json`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::mappers::ConfigMapper;
use crate::repositories::json_file::JsonArrayFile;
use crate::repositories::ConfigRepository;
use crate::types::config::{ConfigEntry, ConfigKey};
use crate::types::dto::ConfigDto;
use crate::types::errors::RepositoryError;
use crate::types::timestamp;

/// File name of the config store inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Stores configuration as a JSON array of `ConfigDto`, one per key.
pub struct FileConfigRepository {
    file: JsonArrayFile,
}

impl FileConfigRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonArrayFile::new(data_dir, CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load(&self) -> Result<Vec<ConfigDto>, RepositoryError> {
        self.file.load()
    }

    fn restore(index: usize, dto: &ConfigDto) -> Result<ConfigEntry, RepositoryError> {
        ConfigMapper::to_domain(dto).map_err(|errors| RepositoryError::InvalidRecord { index, errors })
    }
}

impl ConfigRepository for FileConfigRepository {
    fn get(&self, key: &ConfigKey) -> Result<Option<String>, RepositoryError> {
        let records = self.load()?;
        records
            .iter()
            .enumerate()
            .find(|(_, r)| r.key == key.value())
            .map(|(index, dto)| Self::restore(index, dto).map(|entry| entry.value))
            .transpose()
    }

    fn set(&self, key: &ConfigKey, value: &str) -> Result<(), RepositoryError> {
        let mut records = self.load()?;
        for (index, dto) in records.iter().enumerate() {
            Self::restore(index, dto)?;
        }
        let dto = ConfigMapper::to_dto(&ConfigEntry {
            key: key.clone(),
            value: value.to_string(),
            updated_at: timestamp::now(),
        });

        match records.iter().position(|r| r.key == dto.key) {
            Some(index) => records[index] = dto,
            None => records.push(dto),
        }

        debug!(key = %key, "config value set");
        self.file.store(&records)
    }

    fn remove(&self, key: &ConfigKey) -> Result<(), RepositoryError> {
        let mut records = self.load()?;
        let index = records
            .iter()
            .position(|r| r.key == key.value())
            .ok_or_else(|| RepositoryError::NotFound(key.value().to_string()))?;

        records.remove(index);
        debug!(key = %key, "config value removed");
        self.file.store(&records)
    }

    fn get_all(&self) -> Result<Vec<ConfigEntry>, RepositoryError> {
        self.load()?
            .iter()
            .enumerate()
            .map(|(index, dto)| Self::restore(index, dto))
            .collect()
    }
}
