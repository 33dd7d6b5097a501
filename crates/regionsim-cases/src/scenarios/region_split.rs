//! One region grows under write traffic until it has split many times.

use std::collections::HashMap;

use regionsim_types::{KB, MB, Region, RegionId, RegionsInfo};

use super::{replicas, store_ids, up_stores};
use crate::{Conf, Event, IdAllocator, Scenario};

/// Key every write lands on.
const HOT_KEY: &str = "foobar";
/// Bytes written to [`HOT_KEY`] per tick.
const WRITE_PER_TICK: u64 = 320 * KB;

/// Three stores sharing a single small region, split at 128 MB or 10 000
/// keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionSplit;

impl Scenario for RegionSplit {
    fn name(&self) -> &'static str {
        "region-split"
    }

    fn description(&self) -> &'static str {
        "a single region receives steady writes and must split into more than nine"
    }

    fn build(&self) -> Conf {
        let mut ids = IdAllocator::new();
        let stores = up_stores(&mut ids, 3);
        let all = store_ids(&stores);

        let peers = replicas(&mut ids, &all);
        let leader = Some(peers[0]);
        let regions =
            vec![Region::new(RegionId::new(ids.next_id()), peers, leader).with_size(MB, 10_000)];

        let events = vec![Event::write_flow_on_spot(|_| {
            HashMap::from([(HOT_KEY.to_string(), WRITE_PER_TICK)])
        })];

        Conf {
            stores,
            regions,
            max_id: ids.max_id(),
            events,
            ..Conf::default()
        }
        .with_split_thresholds(128 * MB, 10_000)
        .with_checker(move |regions: &RegionsInfo| {
            regions.len() > 9
                && all
                    .iter()
                    .all(|&s| regions.store_region_count(s) == regions.len())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_configured() {
        let conf = RegionSplit.build();
        assert_eq!(conf.region_split_size, 128 * MB);
        assert_eq!(conf.region_split_keys, 10_000);

        // The starting region already sits on the key threshold.
        let region = &conf.regions[0];
        assert!(conf.needs_split(region.size, region.keys));
        assert!(!conf.needs_split(region.size, region.keys - 1));
    }

    #[test]
    fn writes_target_hot_key() {
        let conf = RegionSplit.build();
        let Event::WriteFlowOnSpot(step) = &conf.events[0] else {
            panic!("expected a spot write flow");
        };
        assert_eq!(step(7).get(HOT_KEY), Some(&WRITE_PER_TICK));
    }

    #[test]
    fn finishes_after_ten_replicated_regions() {
        let conf = RegionSplit.build();
        assert!(!conf.is_finished(&conf.regions_info()));

        let template = conf.regions[0].clone();
        let split: RegionsInfo = (100..110)
            .map(|id| Region {
                id: RegionId::new(id),
                ..template.clone()
            })
            .collect();
        assert!(conf.is_finished(&split));
    }
}
