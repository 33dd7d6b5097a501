//! Unit tests for regionsim-types

use proptest::prelude::*;
use test_case::test_case;

use crate::{
    GB, KB, MB, Peer, PeerId, Region, RegionId, RegionsInfo, Store, StoreId, StoreLabel,
    StoreState, TB,
};

fn peer(id: u64, store: u64) -> Peer {
    Peer::new(PeerId::new(id), StoreId::new(store))
}

fn region(id: u64, peers: &[(u64, u64)], leader: Option<usize>) -> Region {
    let peers: Vec<Peer> = peers.iter().map(|&(p, s)| peer(p, s)).collect();
    let leader = leader.map(|i| peers[i]);
    Region::new(RegionId::new(id), peers, leader)
}

// ============================================================================
// Units
// ============================================================================

#[test_case(KB, 1024; "kilobyte")]
#[test_case(MB, 1024 * 1024; "megabyte")]
#[test_case(GB, 1024 * 1024 * 1024; "gigabyte")]
#[test_case(TB, 1024 * 1024 * 1024 * 1024; "terabyte")]
fn units_are_powers_of_1024(unit: u64, expected: u64) {
    assert_eq!(unit, expected);
}

// ============================================================================
// Store Tests
// ============================================================================

#[test]
fn new_store_is_up_with_unit_weights() {
    let store = Store::new(StoreId::new(1), TB, 900 * GB);

    assert!(store.is_up());
    assert_eq!(store.leader_weight, 1.0);
    assert_eq!(store.region_weight, 1.0);
    assert!(store.labels.is_empty());
    assert!(store.available <= store.capacity);
}

#[test]
fn store_builders_set_fields() {
    let store = Store::new(StoreId::new(7), TB, TB)
        .with_status(StoreState::Offline)
        .with_label(StoreLabel::new("zone", "z1"))
        .with_label(StoreLabel::new("host", "h3"))
        .with_weights(2.0, 0.5)
        .with_version("2.1.0");

    assert_eq!(store.status, StoreState::Offline);
    assert!(!store.is_up());
    assert_eq!(store.label("zone"), Some("z1"));
    assert_eq!(store.label("host"), Some("h3"));
    assert_eq!(store.label("rack"), None);
    assert_eq!(store.leader_weight, 2.0);
    assert_eq!(store.region_weight, 0.5);
    assert_eq!(store.version, "2.1.0");
}

#[test]
fn store_state_serializes_kebab_case() {
    let json = serde_json::to_string(&StoreState::Tombstone).unwrap();
    assert_eq!(json, "\"tombstone\"");
    assert_eq!(StoreState::Offline.to_string(), "offline");
}

// ============================================================================
// Region Tests
// ============================================================================

#[test]
fn leader_store_follows_leader_peer() {
    let r = region(10, &[(11, 1), (12, 2), (13, 3)], Some(1));
    assert_eq!(r.leader_store(), Some(StoreId::new(2)));
    assert!(r.leader_is_member());
}

#[test]
fn region_without_leader_counts_as_member() {
    let r = region(10, &[(11, 1)], None);
    assert_eq!(r.leader_store(), None);
    assert!(r.leader_is_member());
}

#[test]
fn foreign_leader_is_not_member() {
    let mut r = region(10, &[(11, 1), (12, 2)], None);
    r.leader = Some(peer(99, 3));
    assert!(!r.leader_is_member());
}

#[test]
fn peer_lookup_by_store() {
    let r = region(10, &[(11, 1), (12, 2)], Some(0));
    assert!(r.has_peer_on(StoreId::new(2)));
    assert!(!r.has_peer_on(StoreId::new(3)));
    assert_eq!(r.peer_on(StoreId::new(1)).map(|p| p.id), Some(PeerId::new(11)));
}

#[test]
fn with_size_sets_size_and_keys() {
    let r = region(1, &[], None).with_size(96 * MB, 960_000);
    assert_eq!(r.size, 96 * MB);
    assert_eq!(r.keys, 960_000);
}

// ============================================================================
// RegionsInfo Tests
// ============================================================================

#[test]
fn regions_info_counts_per_store() {
    let info = RegionsInfo::from_regions([
        region(1, &[(11, 1), (12, 2)], Some(0)),
        region(2, &[(21, 1), (22, 3)], Some(1)),
        region(3, &[(31, 2), (32, 3)], Some(0)),
    ]);

    assert_eq!(info.len(), 3);
    assert_eq!(info.store_leader_count(StoreId::new(1)), 1);
    assert_eq!(info.store_leader_count(StoreId::new(2)), 1);
    assert_eq!(info.store_leader_count(StoreId::new(3)), 1);
    assert_eq!(info.store_region_count(StoreId::new(1)), 2);
    assert_eq!(info.store_region_count(StoreId::new(4)), 0);
    assert_eq!(
        info.store_peer_region_ids(StoreId::new(3)),
        vec![RegionId::new(2), RegionId::new(3)]
    );
    assert_eq!(
        info.store_leader_region_ids(StoreId::new(3)),
        vec![RegionId::new(2)]
    );
}

#[test]
fn regions_info_insert_replaces_same_id() {
    let mut info = RegionsInfo::new();
    assert!(info.is_empty());

    assert!(info.insert(region(1, &[(11, 1)], Some(0))).is_none());
    let previous = info.insert(region(1, &[(12, 2)], Some(0)));

    assert!(previous.is_some());
    assert_eq!(info.len(), 1);
    assert_eq!(info.store_leader_count(StoreId::new(2)), 1);
    assert_eq!(info.store_leader_count(StoreId::new(1)), 0);

    assert!(info.remove(RegionId::new(1)).is_some());
    assert!(info.get(RegionId::new(1)).is_none());
}

#[test]
fn regions_info_total_size() {
    let info: RegionsInfo = [
        region(1, &[], None).with_size(10 * MB, 1),
        region(2, &[], None).with_size(6 * MB, 1),
    ]
    .into_iter()
    .collect();

    assert_eq!(info.total_size(), 16 * MB);
}

proptest! {
    /// Every region is led from exactly one store, so leader counts add up
    #[test]
    fn leader_counts_sum_to_region_count(stores in prop::collection::vec(1u64..=5, 1..200)) {
        let info = RegionsInfo::from_regions(stores.iter().enumerate().map(|(i, &s)| {
            let id = i as u64 + 1;
            region(id, &[(id * 10, s)], Some(0))
        }));

        let total: usize = (1..=5).map(|s| info.store_leader_count(StoreId::new(s))).sum();
        prop_assert_eq!(total, info.len());
    }
}
