//! Run configuration for the region placement simulator.
//!
//! A [`SimulatorConfig`] says which scenario to build, which split
//! thresholds to override and how verbose logging should be. It is merged
//! by [`ConfigLoader`] from built-in defaults, the [`Layer`] files located
//! by [`Paths`], and `RSIM_*` environment variables, in that order:
//!
//! ```toml
//! # regionsim.toml
//! [case]
//! name = "hot-write"
//!
//! [split]
//! region_split_keys = 0   # disable the key trigger
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use paths::{ConfigFile, LOCAL_CONFIG_FILE, Layer, PROJECT_CONFIG_FILE, Paths};

/// Main simulator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub case: CaseConfig,
    pub split: SplitConfig,
    pub logging: LoggingConfig,
}

/// Which scenario to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub name: String,
    /// Check topology invariants after the scenario is built
    pub validate: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            name: "balance-leader".to_string(),
            validate: true,
        }
    }
}

/// Split threshold overrides.
///
/// `None` keeps the scenario's own threshold. `Some(0)` disables the
/// trigger, the same as a zero threshold in the scenario itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub region_split_size: Option<u64>,
    pub region_split_keys: Option<u64>,
}

impl SplitConfig {
    /// Returns true if neither threshold is overridden.
    pub fn is_empty(&self) -> bool {
        self.region_split_size.is_none() && self.region_split_keys.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration rooted at `project_dir`
    pub fn load_from_dir(project_dir: impl Into<PathBuf>) -> Result<Self> {
        ConfigLoader::for_project(project_dir).load()
    }

    /// Read a single TOML file, ignoring every other source
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration that selects `name` and keeps every other default
    pub fn for_case(name: impl Into<String>) -> Self {
        Self {
            case: CaseConfig {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Reject values no scenario can run with
    pub fn validate(&self) -> Result<()> {
        if self.case.name.trim().is_empty() {
            return Err(ConfigError::EmptyCaseName);
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
