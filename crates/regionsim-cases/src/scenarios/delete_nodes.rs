//! A store is removed and its replicas must move elsewhere.

use rand::seq::SliceRandom;
use regionsim_types::{MB, Region, RegionId, RegionsInfo, StoreId};

use super::{region_counts_within, replicas, scenario_rng, store_ids, up_stores};
use crate::{Conf, Event, IdAllocator, Scenario};

const STORE_COUNT: usize = 8;
const REGION_COUNT: usize = 1000;
/// Tick at which the last store is removed.
const DELETE_TICK: u64 = 10;

/// Eight stores with replicas on three random stores per region; the last
/// store is deleted at [`DELETE_TICK`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteNodes;

impl Scenario for DeleteNodes {
    fn name(&self) -> &'static str {
        "delete-nodes"
    }

    fn description(&self) -> &'static str {
        "a store is deleted and its replicas must be rebuilt on the other seven"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let mut rng = scenario_rng();
        let stores = up_stores(&mut ids, STORE_COUNT);
        let mut all = store_ids(&stores);

        let regions = (0..REGION_COUNT)
            .map(|i| {
                let placement: Vec<StoreId> =
                    all.choose_multiple(&mut rng, 3).copied().collect();
                let peers = replicas(&mut ids, &placement);
                let leader = Some(peers[i % peers.len()]);
                Region::new(RegionId::new(ids.next_id()), peers, leader)
                    .with_size(96 * MB, 960_000)
            })
            .collect();

        let removed = all.pop();
        let remaining = all;
        let events = vec![Event::delete_nodes(move |tick| {
            if tick == DELETE_TICK { removed } else { None }
        })];

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            events,
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            removed.is_none_or(|gone| regions.store_region_count(gone) == 0)
                && region_counts_within(regions, &remaining, &(380..=480))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peers_land_on_distinct_stores() {
        let conf = DeleteNodes.build();
        for region in &conf.regions {
            let mut stores: Vec<StoreId> = region.peers.iter().map(|p| p.store_id).collect();
            stores.sort();
            stores.dedup();
            assert_eq!(stores.len(), 3);
        }
    }

    #[test]
    fn last_store_is_deleted_once() {
        let conf = DeleteNodes.build();
        let Event::DeleteNodes(step) = &conf.events[0] else {
            panic!("expected a delete-nodes event");
        };

        let deleted: Vec<StoreId> = (0..100).filter_map(|tick| step(tick)).collect();
        assert_eq!(deleted, vec![StoreId::new(STORE_COUNT as u64)]);
    }

    #[test]
    fn initial_layout_is_unfinished() {
        let conf = DeleteNodes.build();
        let regions = conf.regions_info();
        assert!(regions.store_region_count(StoreId::new(STORE_COUNT as u64)) > 0);
        assert!(!conf.is_finished(&regions));
    }

    #[test]
    fn placement_is_reproducible() {
        let placement = |conf: &Conf| -> Vec<Vec<StoreId>> {
            conf.regions
                .iter()
                .map(|r| r.peers.iter().map(|p| p.store_id).collect())
                .collect()
        };
        assert_eq!(placement(&DeleteNodes.build()), placement(&DeleteNodes.build()));
    }
}
