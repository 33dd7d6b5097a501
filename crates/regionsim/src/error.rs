//! Error types for scenario preparation.

use regionsim_cases::ConfError;
use regionsim_config::ConfigError;
use thiserror::Error;

/// Errors surfaced to the application layer.
#[derive(Error, Debug)]
pub enum SimError {
    /// No scenario is registered under the requested name.
    #[error("unknown scenario '{name}' (known: {})", .known.join(", "))]
    UnknownScenario {
        name: String,
        known: Vec<&'static str>,
    },

    /// The scenario built a topology that breaks an invariant.
    #[error("scenario '{name}' is invalid: {source}")]
    InvalidScenario {
        name: String,
        #[source]
        source: ConfError,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type for scenario preparation.
pub type Result<T> = std::result::Result<T, SimError>;
