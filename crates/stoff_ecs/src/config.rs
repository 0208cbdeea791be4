//! # ECS Configuration
//!
//! Startup-time sizing for a world. Loaded once, before any entity exists.
//!
//! ```toml
//! [ecs]
//! max_entities = 10000
//! initial_store_capacity = 11
//! ```
//!
//! The `[ecs]` header is optional, so the same keys can live in a
//! dedicated file or inside a larger engine settings file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ecs::INITIAL_CAPACITY;
use crate::error::{EcsError, EcsResult};

/// Default exclusive upper bound on entity ids.
pub const DEFAULT_MAX_ENTITIES: u32 = 10_000;

/// Sizing parameters for a [`World`](crate::World).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EcsConfig {
    /// Exclusive upper bound on entity ids. Sizes the membership index and
    /// bounds the allocator; ids `1..max_entities` can be live at once.
    pub max_entities: u32,
    /// Slot count each component store starts with.
    pub initial_store_capacity: usize,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
            initial_store_capacity: INITIAL_CAPACITY,
        }
    }
}

impl EcsConfig {
    /// Creates a config with the given entity bound and default store sizing.
    #[must_use]
    pub fn with_max_entities(max_entities: u32) -> Self {
        Self {
            max_entities,
            ..Self::default()
        }
    }

    /// Parses a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidConfig`] on malformed TOML, unknown keys, or values
    /// rejected by [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> EcsResult<Self> {
        let mut table: toml::Table =
            toml::from_str(text).map_err(|e| EcsError::InvalidConfig(e.to_string()))?;

        let section = table
            .remove("ecs")
            .unwrap_or_else(|| toml::Value::Table(table));

        let config: Self = section
            .try_into()
            .map_err(|e: toml::de::Error| EcsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> EcsResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EcsError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks that the values describe a usable world.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidConfig`] if `max_entities < 2` (id 0 is reserved,
    /// so nothing could be issued) or `initial_store_capacity == 0`.
    pub fn validate(&self) -> EcsResult<()> {
        if self.max_entities < 2 {
            return Err(EcsError::InvalidConfig(format!(
                "max_entities must be at least 2, got {}",
                self.max_entities
            )));
        }
        if self.initial_store_capacity == 0 {
            return Err(EcsError::InvalidConfig(
                "initial_store_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EcsConfig::default();
        assert_eq!(config.max_entities, 10_000);
        assert_eq!(config.initial_store_capacity, 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flat_and_sectioned() {
        let flat = EcsConfig::from_toml_str("max_entities = 64").unwrap();
        assert_eq!(flat.max_entities, 64);
        assert_eq!(flat.initial_store_capacity, INITIAL_CAPACITY);

        let sectioned = EcsConfig::from_toml_str(
            "[ecs]\nmax_entities = 128\ninitial_store_capacity = 32\n",
        )
        .unwrap();
        assert_eq!(
            sectioned,
            EcsConfig {
                max_entities: 128,
                initial_store_capacity: 32,
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EcsConfig::from_toml_str("max_entities = 1"),
            Err(EcsError::InvalidConfig(_))
        ));
        assert!(matches!(
            EcsConfig::from_toml_str("initial_store_capacity = 0"),
            Err(EcsError::InvalidConfig(_))
        ));
        assert!(matches!(
            EcsConfig::from_toml_str("max_entitys = 10"),
            Err(EcsError::InvalidConfig(_))
        ));
        assert!(matches!(
            EcsConfig::from_toml_str("max_entities = \"lots\""),
            Err(EcsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let id = std::process::id();
        let path = std::env::temp_dir().join(format!("test_stoff_ecs_{id}.toml"));
        fs::write(&path, "[ecs]\nmax_entities = 512\n").unwrap();

        let config = EcsConfig::load(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.max_entities, 512);
        assert_eq!(config.initial_store_capacity, INITIAL_CAPACITY);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EcsConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EcsError::InvalidConfig(msg) if msg.contains("here.toml")));
    }
}
