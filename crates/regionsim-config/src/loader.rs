//! Merges defaults, configuration files and the environment.

use crate::{Paths, Result, SimulatorConfig};
use std::env;
use std::path::PathBuf;

/// Default prefix for environment overrides, e.g. `RSIM_CASE__NAME`.
pub const ENV_PREFIX: &str = "RSIM";

/// Builds a [`SimulatorConfig`] from every layer, later layers winning:
/// built-in defaults, then each existing file from [`Paths::files`], then
/// `<prefix>_*` environment variables with `__` between nested keys.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    paths: Paths,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader rooted at the current directory.
    pub fn new() -> Self {
        Self::for_project(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Loader rooted at `project_dir`.
    pub fn for_project(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: Paths::new(project_dir),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skips the per-user file.
    pub fn without_user_config(mut self) -> Self {
        self.paths = self.paths.without_user_dir();
        self
    }

    /// Merges every layer and validates the result.
    pub fn load(&self) -> Result<SimulatorConfig> {
        let defaults = config::Config::try_from(&SimulatorConfig::default())?;

        let builder = self.paths.existing_files().fold(
            config::Config::builder().add_source(defaults),
            |builder, file| {
                tracing::debug!(
                    layer = file.layer.name(),
                    path = %file.path.display(),
                    "adding configuration layer"
                );
                builder.add_source(config::File::from(file.path).format(config::FileFormat::Toml))
            },
        );

        let simulator_config: SimulatorConfig = builder
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        simulator_config.validate()?;
        Ok(simulator_config)
    }

    /// Falls back to the defaults when any layer is unusable.
    pub fn load_or_default(&self) -> SimulatorConfig {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default configuration");
            SimulatorConfig::default()
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
