//! Configuration keys, stored entries and the fuzzy-finder settings.

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::bookmark::string_value_object;
use crate::types::errors::ValidationError;

/// Key under which the fuzzy-finder executable is stored.
pub const FUZZY_COMMAND_KEY: &str = "fuzzy.command";
/// Key under which the fuzzy-finder arguments are stored.
pub const FUZZY_ARGS_KEY: &str = "fuzzy.args";
/// Key enabling the duplicate-title check on `add` when set to `"true"`.
pub const UNIQUE_TITLES_KEY: &str = "bookmark.uniqueTitles";

/// Executable used when `fuzzy.command` is unset.
pub const DEFAULT_FUZZY_COMMAND: &str = "fzf";
/// Arguments used when `fuzzy.args` is unset.
pub const DEFAULT_FUZZY_ARGS: &str = "";

const SHELL_METACHARACTERS: &[char] = &[
    '&', '|', ';', '$', '`', '(', ')', '{', '}', '[', ']', '<', '>', '\'', '"', '\\',
];

static DANGEROUS_ARGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r";", r"\$\(", r"&&", r"\|\|", r"(?-u:\b)rm\s", r"execute\("]
        .iter()
        .map(|p| Regex::new(p).expect("deny-list pattern is valid"))
        .collect()
});

// === ConfigKey ===

/// Dot-separated alphanumeric key such as `fuzzy.command`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty { field: "ConfigKey" });
        }

        let well_formed = raw
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));
        if !well_formed {
            return Err(ValidationError::InvalidFormat {
                field: "ConfigKey",
                value: raw.to_string(),
            });
        }

        Ok(Self(raw.to_string()))
    }
}

string_value_object!(ConfigKey);

// === ConfigEntry ===

/// One stored configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

// === FuzzyFinderCommand ===

/// Executable name for the fuzzy finder. No shell metacharacters allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyFinderCommand(String);

impl FuzzyFinderCommand {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "FuzzyFinderCommand",
            });
        }
        if raw.contains(SHELL_METACHARACTERS) {
            return Err(ValidationError::ForbiddenCharacters {
                field: "FuzzyFinderCommand",
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }
}

string_value_object!(FuzzyFinderCommand);

// === FuzzyFinderArgs ===

/// Extra arguments passed to the fuzzy finder. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyFinderArgs(String);

impl FuzzyFinderArgs {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        if DANGEROUS_ARGS.iter().any(|pattern| pattern.is_match(raw)) {
            return Err(ValidationError::DangerousPattern {
                field: "FuzzyFinderArgs",
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }
}

string_value_object!(FuzzyFinderArgs);

// === FuzzyFinderConfig ===

/// A fuzzy-finder command paired with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyFinderConfig {
    command: FuzzyFinderCommand,
    args: FuzzyFinderArgs,
}

impl FuzzyFinderConfig {
    pub fn new(command: FuzzyFinderCommand, args: FuzzyFinderArgs) -> Self {
        Self { command, args }
    }

    pub fn command(&self) -> &FuzzyFinderCommand {
        &self.command
    }

    pub fn args(&self) -> &FuzzyFinderArgs {
        &self.args
    }

    /// `command` followed by the trimmed args, or just `command` when the
    /// args are blank.
    pub fn command_line(&self) -> String {
        let args = self.args.value().trim();
        if args.is_empty() {
            self.command.value().to_string()
        } else {
            format!("{} {}", self.command.value(), args)
        }
    }
}

impl fmt::Display for FuzzyFinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
