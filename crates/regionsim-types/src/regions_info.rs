//! Current region layout of a simulated cluster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Region, RegionId, StoreId};

/// The region layout a completion check is evaluated against.
///
/// The simulation engine owns this value and updates it as regions split,
/// merge, move, or change leaders. Checks only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsInfo {
    regions: BTreeMap<RegionId, Region>,
}

impl RegionsInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the layout from a list of regions. Later duplicates win.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            regions: regions.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    /// Inserts a region, returning the previous region with the same id.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.regions.insert(region.id, region)
    }

    pub fn remove(&mut self, id: RegionId) -> Option<Region> {
        self.regions.remove(&id)
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates regions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Number of regions whose leader lives on `store_id`.
    pub fn store_leader_count(&self, store_id: StoreId) -> usize {
        self.iter()
            .filter(|r| r.leader_store() == Some(store_id))
            .count()
    }

    /// Number of regions with a replica on `store_id`.
    pub fn store_region_count(&self, store_id: StoreId) -> usize {
        self.iter().filter(|r| r.has_peer_on(store_id)).count()
    }

    /// Ids of regions led from `store_id`.
    pub fn store_leader_region_ids(&self, store_id: StoreId) -> Vec<RegionId> {
        self.iter()
            .filter(|r| r.leader_store() == Some(store_id))
            .map(|r| r.id)
            .collect()
    }

    /// Ids of regions with a replica on `store_id`.
    pub fn store_peer_region_ids(&self, store_id: StoreId) -> Vec<RegionId> {
        self.iter()
            .filter(|r| r.has_peer_on(store_id))
            .map(|r| r.id)
            .collect()
    }

    /// Sum of approximate sizes across all regions.
    pub fn total_size(&self) -> u64 {
        self.iter().map(|r| r.size).sum()
    }
}

impl FromIterator<Region> for RegionsInfo {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self::from_regions(iter)
    }
}
