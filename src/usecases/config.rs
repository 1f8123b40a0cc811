//! Generic key-value configuration use cases.

use tracing::info;

use crate::repositories::ConfigRepository;
use crate::types::config::{ConfigEntry, ConfigKey};
use crate::types::errors::{ConfigError, ValidationError};

/// Reads one value; `Ok(None)` when unset.
pub struct GetConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> GetConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let key = ConfigKey::create(key)?;
        Ok(self.repository.get(&key)?)
    }
}

/// Stores one value. The value is trimmed and must not be empty.
pub struct SetConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> SetConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = ConfigKey::create(key)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: "Config value",
            }
            .into());
        }

        self.repository.set(&key, value)?;
        info!(key = %key, "config updated");
        Ok(())
    }
}

/// Removes a key that must be set.
pub struct UnsetConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> UnsetConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, key: &str) -> Result<(), ConfigError> {
        let key = ConfigKey::create(key)?;
        self.repository.remove(&key)?;
        info!(key = %key, "config removed");
        Ok(())
    }
}

/// Lists every stored entry in file order.
pub struct ListConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> ListConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        Ok(self.repository.get_all()?)
    }
}
