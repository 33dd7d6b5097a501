//! Many small regions must be merged into fewer, larger ones.

use regionsim_types::{MB, Region, RegionId, RegionsInfo, StoreId};

use super::{replicas, round_robin, store_ids, up_stores};
use crate::{Conf, IdAllocator, Scenario};

const STORE_COUNT: usize = 4;
const REGION_COUNT: usize = 400;
const MAX_REMAINING: usize = 200;

/// Four stores holding 400 undersized regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionMerge;

impl Scenario for RegionMerge {
    fn name(&self) -> &'static str {
        "region-merge"
    }

    fn description(&self) -> &'static str {
        "400 small regions must be merged down to at most 200 while staying balanced"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let stores = up_stores(&mut ids, STORE_COUNT);
        let all = store_ids(&stores);

        let regions = (0..REGION_COUNT)
            .map(|i| {
                let peers = replicas(&mut ids, &round_robin(&all, i));
                let leader = Some(peers[0]);
                Region::new(RegionId::new(ids.next_id()), peers, leader)
                    .with_size(10 * MB, 100_000)
            })
            .collect();

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            regions.len() <= MAX_REMAINING && balanced_within_tenth(regions, &all)
        })
    }
}

/// True if every store's region count is within 10% of the mean.
fn balanced_within_tenth(regions: &RegionsInfo, stores: &[StoreId]) -> bool {
    let counts: Vec<usize> = stores
        .iter()
        .map(|&s| regions.store_region_count(s))
        .collect();
    let total: usize = counts.iter().sum();
    let n = counts.len();

    counts
        .iter()
        .all(|&count| count * 10 * n >= total * 9 && count * 10 * n <= total * 11)
}
