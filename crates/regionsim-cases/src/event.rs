//! Time-triggered scenario events.
//!
//! Each event carries a step function the engine calls with the current
//! tick. This crate never calls the steps itself; it only stores them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regionsim_types::{RegionId, StoreId};

/// Bytes written per key at a tick.
pub type SpotFlowStep = Arc<dyn Fn(u64) -> HashMap<String, u64> + Send + Sync>;

/// Bytes moved per region at a tick.
pub type RegionFlowStep = Arc<dyn Fn(u64) -> HashMap<RegionId, u64> + Send + Sync>;

/// Store to act on at a tick, if any.
pub type NodeStep = Arc<dyn Fn(u64) -> Option<StoreId> + Send + Sync>;

/// A mutation the engine applies to the simulated cluster over time.
#[derive(Clone)]
pub enum Event {
    /// Write traffic addressed by key.
    WriteFlowOnSpot(SpotFlowStep),
    /// Write traffic addressed by region.
    WriteFlowOnRegion(RegionFlowStep),
    /// Read traffic addressed by region.
    ReadFlowOnRegion(RegionFlowStep),
    /// Brings a store up.
    AddNodes(NodeStep),
    /// Removes a store.
    DeleteNodes(NodeStep),
}

impl Event {
    /// Returns the kebab-case name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WriteFlowOnSpot(_) => "write-flow-on-spot",
            Self::WriteFlowOnRegion(_) => "write-flow-on-region",
            Self::ReadFlowOnRegion(_) => "read-flow-on-region",
            Self::AddNodes(_) => "add-nodes",
            Self::DeleteNodes(_) => "delete-nodes",
        }
    }

    pub fn write_flow_on_spot<F>(step: F) -> Self
    where
        F: Fn(u64) -> HashMap<String, u64> + Send + Sync + 'static,
    {
        Self::WriteFlowOnSpot(Arc::new(step))
    }

    pub fn write_flow_on_region<F>(step: F) -> Self
    where
        F: Fn(u64) -> HashMap<RegionId, u64> + Send + Sync + 'static,
    {
        Self::WriteFlowOnRegion(Arc::new(step))
    }

    pub fn read_flow_on_region<F>(step: F) -> Self
    where
        F: Fn(u64) -> HashMap<RegionId, u64> + Send + Sync + 'static,
    {
        Self::ReadFlowOnRegion(Arc::new(step))
    }

    pub fn add_nodes<F>(step: F) -> Self
    where
        F: Fn(u64) -> Option<StoreId> + Send + Sync + 'static,
    {
        Self::AddNodes(Arc::new(step))
    }

    pub fn delete_nodes<F>(step: F) -> Self
    where
        F: Fn(u64) -> Option<StoreId> + Send + Sync + 'static,
    {
        Self::DeleteNodes(Arc::new(step))
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Event").field(&self.kind()).finish()
    }
}
