//! # regionsim-types: Cluster snapshot model
//!
//! This crate contains the value types that describe the starting topology
//! of a simulated storage cluster:
//! - Entity IDs ([`StoreId`], [`RegionId`], [`PeerId`])
//! - Storage nodes ([`Store`], [`StoreState`], [`StoreLabel`])
//! - Data shards ([`Region`], [`Peer`])
//! - Cluster state handed to completion checks ([`RegionsInfo`])
//! - Storage units ([`B`], [`KB`], [`MB`], [`GB`], [`TB`])
//!
//! Everything here is plain data. Scenario constructors build these values
//! once; the simulation engine owns and mutates them afterwards.

#![cfg_attr(test, allow(clippy::float_cmp))] // Test assertions use exact float comparisons

use std::fmt::Display;

use serde::{Deserialize, Serialize};

mod regions_info;

pub use regions_info::RegionsInfo;

// ============================================================================
// Storage Units
// ============================================================================

/// One byte.
pub const B: u64 = 1;
/// One kibibyte.
pub const KB: u64 = B << 10;
/// One mebibyte.
pub const MB: u64 = KB << 10;
/// One gibibyte.
pub const GB: u64 = MB << 10;
/// One tebibyte.
pub const TB: u64 = GB << 10;

// ============================================================================
// Entity IDs - All Copy (cheap 8-byte values)
// ============================================================================

/// Unique identifier for a simulated storage node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct StoreId(u64);

impl StoreId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StoreId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<StoreId> for u64 {
    fn from(id: StoreId) -> Self {
        id.0
    }
}

/// Unique identifier for a simulated region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct RegionId(u64);

impl RegionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RegionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RegionId> for u64 {
    fn from(id: RegionId) -> Self {
        id.0
    }
}

/// Unique identifier for a region replica.
///
/// Peer ids share the id space of stores and regions within one scenario:
/// all three are drawn from the same allocator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PeerId(u64);

impl PeerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PeerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PeerId> for u64 {
    fn from(id: PeerId) -> Self {
        id.0
    }
}

// ============================================================================
// Store
// ============================================================================

/// Lifecycle state of a simulated store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StoreState {
    /// Store is serving traffic.
    #[default]
    Up,
    /// Store is being drained and should lose its replicas.
    Offline,
    /// Store has been removed from the cluster for good.
    Tombstone,
}

impl Display for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Offline => write!(f, "offline"),
            Self::Tombstone => write!(f, "tombstone"),
        }
    }
}

/// A key/value label attached to a store, used by placement constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreLabel {
    pub key: String,
    pub value: String,
}

impl StoreLabel {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A simulated storage node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique within one scenario.
    pub id: StoreId,
    /// Current lifecycle state.
    pub status: StoreState,
    /// Placement labels.
    pub labels: Vec<StoreLabel>,
    /// Total capacity in bytes.
    pub capacity: u64,
    /// Free capacity in bytes. Never exceeds `capacity`.
    pub available: u64,
    /// Bias applied when balancing leaders onto this store.
    pub leader_weight: f32,
    /// Bias applied when balancing regions onto this store.
    pub region_weight: f32,
    /// Version string the store reports.
    pub version: String,
}

impl Store {
    /// Creates an `Up` store with no labels and unit weights.
    pub fn new(id: StoreId, capacity: u64, available: u64) -> Self {
        Self {
            id,
            status: StoreState::Up,
            labels: Vec::new(),
            capacity,
            available,
            leader_weight: 1.0,
            region_weight: 1.0,
            version: String::new(),
        }
    }

    pub fn with_status(mut self, status: StoreState) -> Self {
        self.status = status;
        self
    }

    pub fn with_label(mut self, label: StoreLabel) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_weights(mut self, leader_weight: f32, region_weight: f32) -> Self {
        self.leader_weight = leader_weight;
        self.region_weight = region_weight;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Returns true if the store is serving traffic.
    pub fn is_up(&self) -> bool {
        self.status == StoreState::Up
    }

    /// Returns the value of the label with the given key, if any.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.key == key)
            .map(|label| label.value.as_str())
    }
}

// ============================================================================
// Region
// ============================================================================

/// A replica of a region hosted on a specific store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peer {
    pub id: PeerId,
    pub store_id: StoreId,
}

impl Peer {
    pub fn new(id: PeerId, store_id: StoreId) -> Self {
        Self { id, store_id }
    }
}

/// A simulated contiguous shard of keyed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique within one scenario.
    pub id: RegionId,
    /// Replica placements, in order.
    pub peers: Vec<Peer>,
    /// Leader replica. When set it is one of `peers`.
    pub leader: Option<Peer>,
    /// Approximate size in bytes.
    pub size: u64,
    /// Approximate number of keys.
    pub keys: u64,
}

impl Region {
    /// Creates an empty region with the given peers and leader.
    pub fn new(id: RegionId, peers: Vec<Peer>, leader: Option<Peer>) -> Self {
        Self {
            id,
            peers,
            leader,
            size: 0,
            keys: 0,
        }
    }

    /// Sets the approximate size and key count.
    pub fn with_size(mut self, size: u64, keys: u64) -> Self {
        self.size = size;
        self.keys = keys;
        self
    }

    /// Returns the store hosting the leader, if a leader is set.
    pub fn leader_store(&self) -> Option<StoreId> {
        self.leader.map(|peer| peer.store_id)
    }

    /// Returns the peer placed on `store_id`, if any.
    pub fn peer_on(&self, store_id: StoreId) -> Option<&Peer> {
        self.peers.iter().find(|peer| peer.store_id == store_id)
    }

    /// Returns true if one of the peers is placed on `store_id`.
    pub fn has_peer_on(&self, store_id: StoreId) -> bool {
        self.peer_on(store_id).is_some()
    }

    /// Returns true if the leader is unset or is one of the peers.
    pub fn leader_is_member(&self) -> bool {
        self.leader
            .is_none_or(|leader| self.peers.iter().any(|peer| *peer == leader))
    }
}

#[cfg(test)]
mod tests;
