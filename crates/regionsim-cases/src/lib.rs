//! # regionsim-cases: Scenario definitions for the region placement simulator
//!
//! This crate describes *what* a simulation run starts from and *when* it is
//! done. It never runs a simulation itself.
//!
//! ## Key Concepts
//!
//! - **[`Conf`]**: One scenario: stores, regions, split thresholds, events
//!   and an optional completion [`Checker`]
//! - **[`IdAllocator`]**: Per-scenario monotonic ids, starting at 1
//! - **[`Scenario`]**: A named constructor producing a fresh [`Conf`]
//! - **[`ScenarioRegistry`]**: Immutable name → scenario mapping
//! - **[`Event`]**: Time-triggered traffic and membership changes
//!
//! ## Quick Start
//!
//! ```
//! use regionsim_cases::ScenarioRegistry;
//!
//! let registry = ScenarioRegistry::builtin();
//! let conf = registry.lookup("balance-leader").expect("built-in scenario");
//!
//! assert_eq!(conf.stores.len(), 3);
//! assert!(!conf.is_finished(&conf.regions_info()));
//! assert!(registry.lookup("no-such-scenario").is_none());
//! ```
//!
//! ## Split thresholds
//!
//! [`Conf::needs_split`] fires when either configured threshold is reached.
//! A threshold of 0 disables its trigger entirely:
//!
//! ```
//! use regionsim_cases::Conf;
//!
//! let conf = Conf::default().with_split_thresholds(100, 0);
//! assert!(conf.needs_split(100, 0));
//! assert!(!conf.needs_split(99, 1_000_000));
//! ```

mod checker;
mod conf;
mod error;
mod event;
mod id_allocator;
mod registry;
pub mod scenarios;

pub use checker::Checker;
pub use conf::Conf;
pub use error::{ConfError, RegistryError, Result};
pub use event::{Event, NodeStep, RegionFlowStep, SpotFlowStep};
pub use id_allocator::IdAllocator;
pub use registry::{Scenario, ScenarioRegistry, ScenarioRegistryBuilder};
