//! A handful of regions take most of the read traffic.

use std::collections::HashMap;

use regionsim_types::{MB, Region, RegionId, RegionsInfo, Store, StoreId};

use super::{replicas, round_robin, store_ids, up_stores};
use crate::{Conf, Event, IdAllocator, Scenario};

const STORE_COUNT: usize = 5;
const REGION_COUNT: usize = 1000;
/// Number of regions receiving the hot traffic.
pub(super) const HOT_REGIONS: usize = 20;
const READ_PER_TICK: u64 = 4 * MB;

/// Topology shared by the hot-spot scenarios.
pub(super) struct HotTopology {
    pub stores: Vec<Store>,
    pub regions: Vec<Region>,
    pub hot: Vec<RegionId>,
}

/// Five stores and 1000 regions placed round-robin. Each region is led from
/// its lowest-numbered store, which skews hot leaders toward the first
/// stores.
pub(super) fn hot_topology(ids: &mut IdAllocator) -> HotTopology {
    let stores = up_stores(ids, STORE_COUNT);
    let all = store_ids(&stores);

    let regions: Vec<Region> = (0..REGION_COUNT)
        .map(|i| {
            let peers = replicas(ids, &round_robin(&all, i));
            let leader = peers.iter().min_by_key(|p| p.store_id).copied();
            Region::new(RegionId::new(ids.next_id()), peers, leader).with_size(96 * MB, 960_000)
        })
        .collect();
    let hot = regions.iter().take(HOT_REGIONS).map(|r| r.id).collect();

    HotTopology {
        stores,
        regions,
        hot,
    }
}

/// Number of `hot` regions led from each of `stores`, in order.
pub(super) fn hot_leader_counts(
    regions: &RegionsInfo,
    hot: &[RegionId],
    stores: &[StoreId],
) -> Vec<usize> {
    stores
        .iter()
        .map(|&s| {
            hot.iter()
                .filter_map(|&id| regions.get(id))
                .filter(|r| r.leader_store() == Some(s))
                .count()
        })
        .collect()
}

/// Five stores with 20 read-hot regions whose leaders start skewed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotRead;

impl Scenario for HotRead {
    fn name(&self) -> &'static str {
        "hot-read"
    }

    fn description(&self) -> &'static str {
        "leaders of 20 read-hot regions must be spread across five stores"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let HotTopology {
            stores,
            regions,
            hot,
        } = hot_topology(&mut ids);
        let all = store_ids(&stores);

        let flow = hot.clone();
        let events = vec![Event::read_flow_on_region(move |_| {
            flow.iter().map(|&id| (id, READ_PER_TICK)).collect::<HashMap<_, _>>()
        })];

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            events,
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            hot_leader_counts(regions, &hot, &all)
                .iter()
                .all(|count| (2..=6).contains(count))
        })
    }
}
