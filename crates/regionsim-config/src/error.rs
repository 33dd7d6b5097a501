//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Why a simulator configuration could not be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A layer is malformed or a value has the wrong type after merging.
    #[error("cannot merge configuration layers: {0}")]
    Merge(#[from] config::ConfigError),

    #[error("case.name cannot be empty")]
    EmptyCaseName,

    #[error("logging.filter cannot be empty")]
    EmptyLogFilter,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
