use thiserror::Error;

/// Errors produced while loading a record configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid record configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
