//! Stores join one at a time while the scheduler rebalances.

use regionsim_types::{MB, Region, RegionId, RegionsInfo, StoreId};

use super::{region_counts_within, replicas, store_ids, up_stores};
use crate::{Conf, Event, IdAllocator, Scenario};

const INITIAL_STORES: usize = 3;
const JOINING_STORES: usize = 5;
const REGION_COUNT: usize = 1000;
/// Ticks between two joining stores.
const JOIN_INTERVAL: u64 = 5;

/// Three loaded stores; five more are brought up by an `AddNodes` event,
/// one every [`JOIN_INTERVAL`] ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddNodesDynamic;

impl Scenario for AddNodesDynamic {
    fn name(&self) -> &'static str {
        "add-nodes-dynamic"
    }

    fn description(&self) -> &'static str {
        "five stores join a loaded cluster one by one and must receive replicas"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let stores = up_stores(&mut ids, INITIAL_STORES);
        let initial = store_ids(&stores);
        let joining: Vec<StoreId> = (0..JOINING_STORES)
            .map(|_| StoreId::new(ids.next_id()))
            .collect();

        let regions = (0..REGION_COUNT)
            .map(|i| {
                let peers = replicas(&mut ids, &initial);
                let leader = Some(peers[i % peers.len()]);
                Region::new(RegionId::new(ids.next_id()), peers, leader)
                    .with_size(96 * MB, 960_000)
            })
            .collect();

        let mut all = initial.clone();
        all.extend_from_slice(&joining);

        let events = vec![Event::add_nodes(move |tick| {
            if tick == 0 || tick % JOIN_INTERVAL != 0 {
                return None;
            }
            let slot = usize::try_from(tick / JOIN_INTERVAL - 1).ok()?;
            joining.get(slot).copied()
        })];

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            events,
            ..Conf::default()
        }
        .with_checker(move |regions: &RegionsInfo| {
            region_counts_within(regions, &all, &(330..=420))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_step(conf: &Conf) -> &crate::NodeStep {
        match &conf.events[0] {
            Event::AddNodes(step) => step,
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn joining_ids_are_reserved_below_watermark() {
        let conf = AddNodesDynamic.build();
        assert_eq!(conf.stores.len(), INITIAL_STORES);
        assert_eq!(conf.events.len(), 1);

        let step = join_step(&conf);
        let joined: Vec<StoreId> = (0..=40).filter_map(|tick| step(tick)).collect();

        assert_eq!(joined, (4..=8).map(StoreId::new).collect::<Vec<_>>());
        assert!(joined.iter().all(|&id| u64::from(id) <= conf.max_id));
    }

    #[test]
    fn stores_join_on_interval() {
        let conf = AddNodesDynamic.build();
        let step = join_step(&conf);

        assert_eq!(step(0), None);
        assert_eq!(step(4), None);
        assert_eq!(step(5), Some(StoreId::new(4)));
        assert_eq!(step(25), Some(StoreId::new(8)));
        assert_eq!(step(30), None);
    }

    #[test]
    fn initial_layout_is_unfinished() {
        let conf = AddNodesDynamic.build();
        assert!(!conf.is_finished(&conf.regions_info()));
    }
}
