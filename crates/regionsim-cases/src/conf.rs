//! Scenario configuration handed to the simulation engine.

use std::collections::HashSet;
use std::fmt;

use regionsim_types::{Region, RegionsInfo, Store};

use crate::{Checker, ConfError, Event, Result};

/// One complete scenario definition.
///
/// A `Conf` owns its stores, regions and events. It is built by exactly one
/// scenario constructor call and is never shared between runs.
///
/// # Split thresholds
///
/// `region_split_size` and `region_split_keys` use 0 as an opt-out
/// sentinel: a zero threshold never fires, whatever the region's size or
/// key count. See [`needs_split`](Self::needs_split).
#[derive(Default)]
pub struct Conf {
    /// Starting stores.
    pub stores: Vec<Store>,
    /// Starting regions.
    pub regions: Vec<Region>,
    /// Highest id issued while building this scenario.
    pub max_id: u64,
    /// Size in bytes at which a region should split (0 disables).
    pub region_split_size: u64,
    /// Key count at which a region should split (0 disables).
    pub region_split_keys: u64,
    /// Time-triggered mutations, in order.
    pub events: Vec<Event>,
    /// Goal check. Absent means the scenario never finishes through it.
    pub checker: Option<Box<dyn Checker>>,
}

impl Conf {
    /// Replaces both split thresholds.
    pub fn with_split_thresholds(mut self, size: u64, keys: u64) -> Self {
        self.region_split_size = size;
        self.region_split_keys = keys;
        self
    }

    /// Installs the goal check.
    pub fn with_checker(mut self, checker: impl Checker + 'static) -> Self {
        self.checker = Some(Box::new(checker));
        self
    }

    /// Returns true if a region of this size and key count should split.
    ///
    /// Either trigger is enough. A trigger fires when its threshold is
    /// non-zero and the value reaches it (inclusive).
    pub fn needs_split(&self, size: u64, keys: u64) -> bool {
        if self.region_split_size != 0 && size >= self.region_split_size {
            return true;
        }
        if self.region_split_keys != 0 && keys >= self.region_split_keys {
            return true;
        }
        false
    }

    /// Runs the goal check against `regions`. Returns false when unset.
    pub fn is_finished(&self, regions: &RegionsInfo) -> bool {
        self.checker
            .as_ref()
            .is_some_and(|checker| checker.check(regions))
    }

    /// Returns the starting region layout.
    pub fn regions_info(&self) -> RegionsInfo {
        RegionsInfo::from_regions(self.regions.iter().cloned())
    }

    /// Checks the topology invariants scenario constructors must uphold.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking stores before regions.
    pub fn validate(&self) -> Result<()> {
        let mut store_ids = HashSet::with_capacity(self.stores.len());
        for store in &self.stores {
            if !store_ids.insert(store.id) {
                return Err(ConfError::DuplicateStore(store.id));
            }
            if store.available > store.capacity {
                return Err(ConfError::AvailableExceedsCapacity {
                    store: store.id,
                    capacity: store.capacity,
                    available: store.available,
                });
            }
            self.check_watermark(u64::from(store.id))?;
        }

        let mut region_ids = HashSet::with_capacity(self.regions.len());
        let mut peer_ids = HashSet::new();
        for region in &self.regions {
            if !region_ids.insert(region.id) {
                return Err(ConfError::DuplicateRegion(region.id));
            }
            self.check_watermark(u64::from(region.id))?;

            for peer in &region.peers {
                if !peer_ids.insert(peer.id) {
                    return Err(ConfError::DuplicatePeer {
                        region: region.id,
                        peer: peer.id,
                    });
                }
                if !store_ids.contains(&peer.store_id) {
                    return Err(ConfError::UnknownStore {
                        region: region.id,
                        peer: peer.id,
                        store: peer.store_id,
                    });
                }
                self.check_watermark(u64::from(peer.id))?;
            }

            if let Some(leader) = region.leader {
                if !region.leader_is_member() {
                    return Err(ConfError::LeaderNotPeer {
                        region: region.id,
                        leader: leader.id,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_watermark(&self, id: u64) -> Result<()> {
        if id > self.max_id {
            return Err(ConfError::IdAboveWatermark {
                id,
                max_id: self.max_id,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conf")
            .field("stores", &self.stores.len())
            .field("regions", &self.regions.len())
            .field("max_id", &self.max_id)
            .field("region_split_size", &self.region_split_size)
            .field("region_split_keys", &self.region_split_keys)
            .field("events", &self.events)
            .field("checker", &self.checker.is_some())
            .finish()
    }
}
