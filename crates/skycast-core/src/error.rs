use thiserror::Error;

/// Errors from the persisted configuration store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
