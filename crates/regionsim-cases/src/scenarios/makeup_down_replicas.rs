//! Replicas on an offline store must be rebuilt elsewhere.

use regionsim_types::{MB, Region, RegionId, RegionsInfo, StoreState};

use super::{replicas, round_robin, store_ids, up_stores};
use crate::{Conf, IdAllocator, Scenario};

const STORE_COUNT: usize = 5;
const REGION_COUNT: usize = 400;
const REPLICAS: usize = 3;

/// Five stores, the last one offline, with replicas placed round-robin
/// across all five.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeupDownReplicas;

impl Scenario for MakeupDownReplicas {
    fn name(&self) -> &'static str {
        "makeup-down-replicas"
    }

    fn description(&self) -> &'static str {
        "replicas on an offline store must be replaced to restore three healthy copies"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let mut stores = up_stores(&mut ids, STORE_COUNT);
        let all = store_ids(&stores);
        let down = all[STORE_COUNT - 1];
        if let Some(store) = stores.last_mut() {
            store.status = StoreState::Offline;
        }

        let regions = (0..REGION_COUNT)
            .map(|i| {
                let peers = replicas(&mut ids, &round_robin(&all, i));
                let leader = peers.iter().find(|p| p.store_id != down).copied();
                Region::new(RegionId::new(ids.next_id()), peers, leader)
                    .with_size(96 * MB, 960_000)
            })
            .collect();

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            regions
                .iter()
                .all(|r| r.peers.len() == REPLICAS && !r.has_peer_on(down))
        })
    }
}
