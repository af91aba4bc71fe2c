//! Error types for the event multiplexer

use thiserror::Error;

/// Errors produced while loading or validating a [`crate::mapper::MapperConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Configuration validation errors
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Create a validation error with context
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
}

/// Errors that can occur when wiring producers into a mapper
#[derive(Debug, Error)]
pub enum MapperError {
    /// The signal handed to `map_connect`/`map_connect1` has no owning producer,
    /// so there is no identity to associate a value with.
    #[error("Signal has no identifiable sender; cannot map it in '{mapper}'")]
    InvalidSender { mapper: String },

    /// Mapper configuration was rejected
    #[error("Mapper configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;
