//! Tests for the spatial index

use grovetrack::synthetic::offset_point;
use grovetrack::{Bounds, GeoPoint, Grove, GroveStore, SpatialIndex};

const ORIGIN: GeoPoint = GeoPoint {
    latitude: 37.7909,
    longitude: 26.7042,
};

fn store_with_two_groves() -> GroveStore {
    let mut store = GroveStore::new();
    store.create(Grove::new(
        "Eleni",
        "Koroneiki",
        true,
        false,
        vec![ORIGIN, offset_point(&ORIGIN, 30.0, 30.0)],
    ));
    store.create(Grove::new(
        "Nikos",
        "Kalamata",
        false,
        false,
        vec![offset_point(&ORIGIN, 5_000.0, 0.0)],
    ));
    store
}

#[test]
fn test_rebuild_indexes_groves_with_bounds() {
    let mut store = store_with_two_groves();
    store.create(Grove::new("Maria", "Picual", false, false, vec![]));

    let mut index = SpatialIndex::new();
    index.rebuild(&store);

    // The empty-boundary grove is not indexed.
    assert_eq!(index.len(), 2);
}

#[test]
fn test_query_viewport() {
    let store = store_with_two_groves();
    let mut index = SpatialIndex::new();
    index.rebuild(&store);

    let near = index.query_viewport(&Bounds {
        min_lat: ORIGIN.latitude - 0.001,
        max_lat: ORIGIN.latitude + 0.001,
        min_lng: ORIGIN.longitude - 0.001,
        max_lng: ORIGIN.longitude + 0.001,
    });
    assert_eq!(near.len(), 1);

    let everything = index.query_viewport(&Bounds {
        min_lat: 37.0,
        max_lat: 38.0,
        min_lng: 26.0,
        max_lng: 27.0,
    });
    assert_eq!(everything.len(), 2);
}

#[test]
fn test_find_nearby() {
    let store = store_with_two_groves();
    let mut index = SpatialIndex::new();
    index.rebuild(&store);

    let hits = index.find_nearby(ORIGIN.latitude, ORIGIN.longitude, 0.001);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_dirty_tracking() {
    let mut store = GroveStore::new();
    let mut index = SpatialIndex::new();

    index.ensure_built(&store);
    assert!(index.is_empty());

    store.create(Grove::new("Eleni", "Koroneiki", false, false, vec![ORIGIN]));

    // Not dirty yet: ensure_built is a no-op.
    index.ensure_built(&store);
    assert!(index.is_empty());

    index.mark_dirty();
    index.ensure_built(&store);
    assert_eq!(index.len(), 1);
    assert!(!index.is_dirty());
}
