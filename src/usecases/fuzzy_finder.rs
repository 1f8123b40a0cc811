//! Fuzzy-finder settings stored under `fuzzy.command` and `fuzzy.args`.

use tracing::info;

use crate::repositories::ConfigRepository;
use crate::types::config::{
    ConfigKey, FuzzyFinderArgs, FuzzyFinderCommand, FuzzyFinderConfig, DEFAULT_FUZZY_ARGS,
    DEFAULT_FUZZY_COMMAND, FUZZY_ARGS_KEY, FUZZY_COMMAND_KEY,
};
use crate::types::errors::ConfigError;

/// Reads the fuzzy-finder settings, filling in defaults for unset keys.
///
/// Stored values are re-validated, so a value that no longer passes the
/// current rules fails the read instead of reaching a shell.
pub struct GetFuzzyFinderConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> GetFuzzyFinderConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<FuzzyFinderConfig, ConfigError> {
        let command_key = ConfigKey::create(FUZZY_COMMAND_KEY)?;
        let args_key = ConfigKey::create(FUZZY_ARGS_KEY)?;

        let command = self.stored_or(&command_key, DEFAULT_FUZZY_COMMAND)?;
        let args = self.stored_or(&args_key, DEFAULT_FUZZY_ARGS)?;

        Ok(FuzzyFinderConfig::new(
            FuzzyFinderCommand::create(&command)?,
            FuzzyFinderArgs::create(&args)?,
        ))
    }

    /// An empty stored value counts as unset.
    fn stored_or(&self, key: &ConfigKey, default: &str) -> Result<String, ConfigError> {
        Ok(self
            .repository
            .get(key)?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }
}

/// Writes the fuzzy-finder settings.
pub struct SetFuzzyFinderConfig<'a, R: ConfigRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: ConfigRepository + ?Sized> SetFuzzyFinderConfig<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Stores both the command and the (possibly empty) args.
    pub fn execute(&self, config: &FuzzyFinderConfig) -> Result<(), ConfigError> {
        let command_key = ConfigKey::create(FUZZY_COMMAND_KEY)?;
        let args_key = ConfigKey::create(FUZZY_ARGS_KEY)?;

        self.repository.set(&command_key, config.command().value())?;
        self.repository.set(&args_key, config.args().value())?;
        info!(command_line = %config, "fuzzy finder configured");
        Ok(())
    }

    /// Validates and stores only the parts that were supplied.
    ///
    /// Both inputs are validated before anything is written.
    pub fn update(&self, command: Option<&str>, args: Option<&str>) -> Result<(), ConfigError> {
        let command = command.map(FuzzyFinderCommand::create).transpose()?;
        let args = args.map(FuzzyFinderArgs::create).transpose()?;

        if let Some(command) = command {
            let key = ConfigKey::create(FUZZY_COMMAND_KEY)?;
            self.repository.set(&key, command.value())?;
            info!(command = %command, "fuzzy finder command set");
        }
        if let Some(args) = args {
            let key = ConfigKey::create(FUZZY_ARGS_KEY)?;
            self.repository.set(&key, args.value())?;
            info!(args = %args, "fuzzy finder args set");
        }
        Ok(())
    }
}
