use std::path::PathBuf;

/// Core error types for opsdesk.
#[derive(Debug, thiserror::Error)]
pub enum OpsdeskError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to decode stored session: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write session: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, OpsdeskError>;
