//! Error types for scenario definitions.

use regionsim_types::{PeerId, RegionId, StoreId};
use thiserror::Error;

/// A scenario definition that breaks a topology invariant.
///
/// Returned by [`Conf::validate`](crate::Conf::validate). These are bugs in
/// a scenario constructor, never runtime faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfError {
    /// Two stores share an id.
    #[error("duplicate store id {0}")]
    DuplicateStore(StoreId),

    /// Two regions share an id.
    #[error("duplicate region id {0}")]
    DuplicateRegion(RegionId),

    /// Two peers share an id.
    #[error("duplicate peer id {peer} in region {region}")]
    DuplicatePeer { region: RegionId, peer: PeerId },

    /// A store reports more free space than it has.
    #[error("store {store} has {available} bytes available but capacity {capacity}")]
    AvailableExceedsCapacity {
        store: StoreId,
        capacity: u64,
        available: u64,
    },

    /// A peer is placed on a store that is not part of the scenario.
    #[error("region {region} has peer {peer} on unknown store {store}")]
    UnknownStore {
        region: RegionId,
        peer: PeerId,
        store: StoreId,
    },

    /// The leader is not one of the region's peers.
    #[error("region {region} leader {leader} is not one of its peers")]
    LeaderNotPeer { region: RegionId, leader: PeerId },

    /// An id in use is above the recorded watermark.
    #[error("id {id} exceeds watermark {max_id}")]
    IdAboveWatermark { id: u64, max_id: u64 },
}

/// Errors raised while building a [`ScenarioRegistry`](crate::ScenarioRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A scenario with this name is already registered.
    #[error("scenario '{0}' is already registered")]
    DuplicateScenario(&'static str),

    /// Scenario names must be non-empty.
    #[error("scenario name cannot be empty")]
    EmptyName,
}

/// Result type for scenario definitions. Registry operations name
/// [`RegistryError`] explicitly.
pub type Result<T, E = ConfError> = std::result::Result<T, E>;
