//! # regionsim
//!
//! Scenario core of a cluster simulator that exercises region placement
//! scheduling without a real cluster.
//!
//! ```text
//! ┌──────────────────┐   name    ┌──────────────────┐   Conf   ┌──────────────┐
//! │ SimulatorConfig  │ ────────→ │ ScenarioRegistry │ ───────→ │    engine    │
//! │ (regionsim.toml) │           │  (built-ins)     │          │  (external)  │
//! └──────────────────┘           └──────────────────┘          └──────────────┘
//!                                                   needs_split / is_finished
//! ```
//!
//! # Quick Start
//!
//! ```
//! use regionsim::{ScenarioRegistry, SimulatorConfig, prepare_scenario};
//!
//! let registry = ScenarioRegistry::builtin();
//! let config = SimulatorConfig::for_case("region-split");
//!
//! let conf = prepare_scenario(&config, &registry)?;
//! assert!(conf.needs_split(128 << 20, 0));
//! # Ok::<(), regionsim::SimError>(())
//! ```
//!
//! # Modules
//!
//! - **Model**: [`Store`], [`Region`], [`Peer`], [`RegionsInfo`]
//! - **Scenarios**: [`Conf`], [`ScenarioRegistry`], [`Scenario`], [`Checker`], [`Event`]
//! - **Configuration**: [`SimulatorConfig`], [`ConfigLoader`]

mod error;

pub use error::{Result, SimError};

pub use regionsim_cases::{
    Checker, Conf, ConfError, Event, IdAllocator, Scenario, ScenarioRegistry,
    ScenarioRegistryBuilder,
};
pub use regionsim_config::{ConfigError, ConfigLoader, SimulatorConfig, SplitConfig};
pub use regionsim_types::{
    GB, KB, MB, Peer, PeerId, Region, RegionId, RegionsInfo, Store, StoreId, StoreLabel,
    StoreState, TB,
};

/// Builds the configured scenario, ready to hand to the engine.
///
/// Looks up `config.case.name` in `registry`, applies any split threshold
/// overrides, and validates the topology when `config.case.validate` is set.
///
/// # Errors
///
/// Returns [`SimError::UnknownScenario`] if the name is not registered and
/// [`SimError::InvalidScenario`] if validation is enabled and fails.
pub fn prepare_scenario(config: &SimulatorConfig, registry: &ScenarioRegistry) -> Result<Conf> {
    let name = config.case.name.as_str();
    let mut conf = registry.lookup(name).ok_or_else(|| SimError::UnknownScenario {
        name: name.to_string(),
        known: registry.names(),
    })?;

    apply_split_overrides(&mut conf, config.split);

    if config.case.validate {
        conf.validate().map_err(|source| SimError::InvalidScenario {
            name: name.to_string(),
            source,
        })?;
    }

    tracing::info!(
        scenario = name,
        stores = conf.stores.len(),
        regions = conf.regions.len(),
        events = conf.events.len(),
        region_split_size = conf.region_split_size,
        region_split_keys = conf.region_split_keys,
        "prepared scenario"
    );
    Ok(conf)
}

/// Loads the layered configuration and prepares the scenario it selects.
///
/// # Errors
///
/// Returns [`SimError::Config`] if any configuration layer is unusable,
/// otherwise the errors of [`prepare_scenario`].
pub fn prepare_from_loader(loader: &ConfigLoader, registry: &ScenarioRegistry) -> Result<Conf> {
    let config = loader.load()?;
    prepare_scenario(&config, registry)
}

/// Replaces the thresholds `split` overrides and leaves the rest alone.
pub fn apply_split_overrides(conf: &mut Conf, split: SplitConfig) {
    if let Some(size) = split.region_split_size {
        tracing::debug!(from = conf.region_split_size, to = size, "overriding split size");
        conf.region_split_size = size;
    }
    if let Some(keys) = split.region_split_keys {
        tracing::debug!(from = conf.region_split_keys, to = keys, "overriding split keys");
        conf.region_split_keys = keys;
    }
}

/// Installs a `tracing` subscriber for the process.
///
/// `RUST_LOG` wins over `default_filter` when set.
///
/// # Errors
///
/// Returns [`SimError::Logging`] if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
        .map_err(|e| SimError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SimError::Logging(e.to_string()))
}
