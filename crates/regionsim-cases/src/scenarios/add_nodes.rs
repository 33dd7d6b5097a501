//! Seven empty stores join a loaded three-store cluster.

use rand::Rng;
use regionsim_types::{MB, Region, RegionId, RegionsInfo};

use super::{
    leader_counts_within, region_counts_within, replicas, scenario_rng, store_ids, up_stores,
};
use crate::{Conf, IdAllocator, Scenario};

const STORE_COUNT: usize = 10;
const LOADED_STORES: usize = 3;
const REGION_COUNT: usize = 1000;

/// Ten stores; every region starts on the first three, with a randomly
/// chosen leader.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddNodes;

impl Scenario for AddNodes {
    fn name(&self) -> &'static str {
        "add-nodes"
    }

    fn description(&self) -> &'static str {
        "regions packed on three stores must spread to seven empty ones"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let mut rng = scenario_rng();
        let stores = up_stores(&mut ids, STORE_COUNT);
        let all = store_ids(&stores);
        let loaded = &all[..LOADED_STORES];

        let regions = (0..REGION_COUNT)
            .map(|_| {
                let peers = replicas(&mut ids, loaded);
                let leader = Some(peers[rng.gen_range(0..peers.len())]);
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
            region_counts_within(regions, &all, &(280..=320))
                && leader_counts_within(regions, &all, &(80..=120))
        })
    }
}
