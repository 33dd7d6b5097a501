//! A handful of regions take most of the write traffic.

use std::collections::HashMap;

use regionsim_types::{MB, RegionId, RegionsInfo, StoreId};

use super::hot_read::{HotTopology, hot_leader_counts, hot_topology};
use super::store_ids;
use crate::{Conf, Event, IdAllocator, Scenario};

const WRITE_PER_TICK: u64 = 2 * MB;

/// Same topology as `hot-read`, with write traffic on the hot regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotWrite;

impl Scenario for HotWrite {
    fn name(&self) -> &'static str {
        "hot-write"
    }

    fn description(&self) -> &'static str {
        "leaders and replicas of 20 write-hot regions must be spread across five stores"
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
        let events = vec![Event::write_flow_on_region(move |_| {
            flow.iter().map(|&id| (id, WRITE_PER_TICK)).collect::<HashMap<_, _>>()
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
                && hot_peer_counts(regions, &hot, &all)
                    .iter()
                    .all(|count| (8..=16).contains(count))
        })
    }
}

/// Number of `hot` regions with a replica on each of `stores`, in order.
fn hot_peer_counts(regions: &RegionsInfo, hot: &[RegionId], stores: &[StoreId]) -> Vec<usize> {
    stores
        .iter()
        .map(|&s| {
            hot.iter()
                .filter_map(|&id| regions.get(id))
                .filter(|r| r.has_peer_on(s))
                .count()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::hot_read::HOT_REGIONS;

    #[test]
    fn hot_peers_start_balanced_but_leaders_do_not() {
        let conf = HotWrite.build();
        let regions = conf.regions_info();
        let hot: Vec<RegionId> = conf.regions.iter().take(HOT_REGIONS).map(|r| r.id).collect();
        let stores = store_ids(&conf.stores);

        assert_eq!(hot_peer_counts(&regions, &hot, &stores), vec![12; 5]);
        assert!(!conf.is_finished(&regions));
    }

    #[test]
    fn writes_hit_every_hot_region() {
        let conf = HotWrite.build();
        let Event::WriteFlowOnRegion(step) = &conf.events[0] else {
            panic!("expected a region write flow");
        };
        let writes = step(3);

        assert_eq!(writes.len(), HOT_REGIONS);
        assert!(writes.values().all(|&bytes| bytes == WRITE_PER_TICK));
    }
}
