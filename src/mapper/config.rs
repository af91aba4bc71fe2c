//! Mapper configuration
//!
//! Loaded from TOML or built in code:
//!
//! ```toml
//! name = "legend"
//! initial_capacity = 32
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for the pre-allocated association table
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

const DEFAULT_NAME: &str = "signal_mapper";
const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Settings for a [`super::SignalMapper`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Label used in log lines and `Debug` output
    pub name: String,
    /// Number of associations to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl MapperConfig {
    /// Default settings under a custom name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::validation("mapper name must not be empty"));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::validation(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}
