use crate::mappers::collect;
use crate::types::config::{ConfigEntry, ConfigKey};
use crate::types::dto::ConfigDto;
use crate::types::errors::ValidationError;
use crate::types::timestamp;

/// Maps between `ConfigDto` and `ConfigEntry`.
pub struct ConfigMapper;

impl ConfigMapper {
    /// Validates a stored entry. The value itself is free text.
    pub fn to_domain(dto: &ConfigDto) -> Result<ConfigEntry, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let key = collect(ConfigKey::create(&dto.key), &mut errors);
        let updated_at = collect(timestamp::parse("updatedAt", &dto.updated_at), &mut errors);

        match (key, updated_at) {
            (Some(key), Some(updated_at)) => Ok(ConfigEntry {
                key,
                value: dto.value.clone(),
                updated_at,
            }),
            _ => Err(errors),
        }
    }

    pub fn to_dto(entry: &ConfigEntry) -> ConfigDto {
        ConfigDto {
            key: entry.key.value().to_string(),
            value: entry.value.clone(),
            updated_at: timestamp::format(&entry.updated_at),
        }
    }
}
