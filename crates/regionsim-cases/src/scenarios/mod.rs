//! Built-in placement scenarios.
//!
//! Every scenario draws its store, peer and region ids from a fresh
//! [`IdAllocator`] and records the final watermark in [`Conf::max_id`].
//! Scenarios that need randomness use a [`SmallRng`] seeded with
//! [`SCENARIO_SEED`], so repeated builds are identical.

use std::ops::RangeInclusive;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use regionsim_types::{GB, Peer, PeerId, RegionsInfo, Store, StoreId, TB};

use crate::{IdAllocator, Scenario};

mod add_nodes;
mod add_nodes_dynamic;
mod balance_leader;
mod delete_nodes;
mod hot_read;
mod hot_write;
mod makeup_down_replicas;
mod region_merge;
mod region_split;

pub use add_nodes::AddNodes;
pub use add_nodes_dynamic::AddNodesDynamic;
pub use balance_leader::BalanceLeader;
pub use delete_nodes::DeleteNodes;
pub use hot_read::HotRead;
pub use hot_write::HotWrite;
pub use makeup_down_replicas::MakeupDownReplicas;
pub use region_merge::RegionMerge;
pub use region_split::RegionSplit;

/// Seed for scenario-local randomness.
pub const SCENARIO_SEED: u64 = 0x5EED_CA5E;

/// Version reported by every built-in store.
const STORE_VERSION: &str = "2.1.0";

/// Returns every built-in scenario.
pub fn builtin() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(BalanceLeader),
        Box::new(AddNodes),
        Box::new(AddNodesDynamic),
        Box::new(DeleteNodes),
        Box::new(RegionSplit),
        Box::new(RegionMerge),
        Box::new(HotRead),
        Box::new(HotWrite),
        Box::new(MakeupDownReplicas),
    ]
}

fn scenario_rng() -> SmallRng {
    SmallRng::seed_from_u64(SCENARIO_SEED)
}

/// Allocates `count` up stores with 1 TB capacity and 900 GB free.
fn up_stores(ids: &mut IdAllocator, count: usize) -> Vec<Store> {
    (0..count)
        .map(|_| Store::new(StoreId::new(ids.next_id()), TB, 900 * GB).with_version(STORE_VERSION))
        .collect()
}

/// Allocates one peer per store, in the given order.
fn replicas(ids: &mut IdAllocator, stores: &[StoreId]) -> Vec<Peer> {
    stores
        .iter()
        .map(|&store_id| Peer::new(PeerId::new(ids.next_id()), store_id))
        .collect()
}

/// Picks three consecutive stores starting at `index`, wrapping around.
fn round_robin(stores: &[StoreId], index: usize) -> [StoreId; 3] {
    let n = stores.len();
    [
        stores[index % n],
        stores[(index + 1) % n],
        stores[(index + 2) % n],
    ]
}

fn store_ids(stores: &[Store]) -> Vec<StoreId> {
    stores.iter().map(|s| s.id).collect()
}

/// True if every store in `stores` holds a region count inside `range`.
fn region_counts_within(
    regions: &RegionsInfo,
    stores: &[StoreId],
    range: &RangeInclusive<usize>,
) -> bool {
    stores
        .iter()
        .all(|&s| range.contains(&regions.store_region_count(s)))
}

/// True if every store in `stores` leads a region count inside `range`.
fn leader_counts_within(
    regions: &RegionsInfo,
    stores: &[StoreId],
    range: &RangeInclusive<usize>,
) -> bool {
    stores
        .iter()
        .all(|&s| range.contains(&regions.store_leader_count(s)))
}
