//! All leaders start on one store; the scheduler must spread them.

use regionsim_types::{MB, Region, RegionId, RegionsInfo};

use super::{replicas, store_ids, up_stores};
use crate::{Conf, IdAllocator, Scenario};

const REGION_COUNT: usize = 1000;

/// Three stores, every region replicated on all of them, every leader on
/// the first store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceLeader;

impl Scenario for BalanceLeader {
    fn name(&self) -> &'static str {
        "balance-leader"
    }

    fn description(&self) -> &'static str {
        "1000 regions led from a single store must be rebalanced across three stores"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let stores = up_stores(&mut ids, 3);
        let all = store_ids(&stores);

        let regions = (0..REGION_COUNT)
            .map(|_| {
                let peers = replicas(&mut ids, &all);
                let leader = Some(peers[0]);
                Region::new(RegionId::new(ids.next_id()), peers, leader)
                    .with_size(96 * MB, 960_000)
            })
            .collect();

        let [first, second, third] = [all[0], all[1], all[2]];
        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            regions.store_leader_count(first) <= 350
                && regions.store_leader_count(second) >= 300
                && regions.store_leader_count(third) >= 300
        })
    }
}
