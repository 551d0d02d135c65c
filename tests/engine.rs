//! Integration tests for the grove engine

use grovetrack::proximity::ProximityEffect;
use grovetrack::synthetic::offset_point;
use grovetrack::{Bounds, EditOutcome, GeoPoint, Grove, GroveEngine, Notifier};

const ORIGIN: GeoPoint = GeoPoint {
    latitude: 37.7909,
    longitude: 26.7042,
};

/// Notifier double recording every alert it receives.
#[derive(Debug, Default)]
struct RecordingNotifier {
    alerts: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        self.alerts.push((title.to_string(), body.to_string()));
    }
}

fn untracked_grove(coordinates: Vec<GeoPoint>) -> Grove {
    Grove::new("Eleni", "Koroneiki", false, false, coordinates)
}

#[test]
fn test_add_and_get_grove() {
    let mut engine = GroveEngine::new();
    let key = engine.add_grove(untracked_grove(vec![ORIGIN]));

    assert_eq!(engine.grove_count(), 1);
    let grove = engine.grove(&key).unwrap();
    assert_eq!(grove.owner, "Eleni");
    assert_eq!(grove.key.as_deref(), Some(key.as_str()));
}

#[test]
fn test_edit_grove_full_replace() {
    let mut engine = GroveEngine::new();
    let key = engine.add_grove(untracked_grove(vec![ORIGIN]));

    let mut edited = untracked_grove(vec![ORIGIN, offset_point(&ORIGIN, 20.0, 0.0)]);
    edited.owner = "Nikos".to_string();
    let outcome = engine.edit_grove(&key, edited).unwrap();

    assert_eq!(outcome, EditOutcome::Updated);
    let grove = engine.grove(&key).unwrap();
    assert_eq!(grove.owner, "Nikos");
    assert_eq!(grove.coordinates.len(), 2);
}

#[test]
fn test_edit_with_empty_boundary_deletes() {
    let mut engine = GroveEngine::new();
    let key = engine.add_grove(untracked_grove(vec![ORIGIN]));

    let outcome = engine.edit_grove(&key, untracked_grove(vec![])).unwrap();

    assert_eq!(outcome, EditOutcome::Deleted);
    assert!(engine.grove(&key).is_none());
    assert_eq!(engine.grove_count(), 0);
}

#[test]
fn test_remove_missing_grove_fails() {
    let mut engine = GroveEngine::new();
    assert!(engine.remove_grove("nope").is_err());
}

#[test]
fn test_handle_location_auto_sprays() {
    let mut engine = GroveEngine::new();
    let key = engine.add_grove(untracked_grove(vec![offset_point(&ORIGIN, 5.0, 0.0)]));

    let mut notifier = RecordingNotifier::default();
    let effects = engine.handle_location(&ORIGIN, &mut notifier);

    assert_eq!(effects.len(), 1);
    assert!(matches!(&effects[0], ProximityEffect::MarkSprayed { key: k, .. } if *k == key));
    assert!(notifier.alerts.is_empty());

    let grove = engine.grove(&key).unwrap();
    assert!(grove.sprayed);
    assert!(!grove.organic);

    // Second pass over the now-sprayed grove is a no-op.
    let effects = engine.handle_location(&ORIGIN, &mut notifier);
    assert!(effects.is_empty());
}

#[test]
fn test_handle_location_notifies_for_organic() {
    let mut engine = GroveEngine::new();
    engine.add_grove(Grove::new(
        "Eleni",
        "Koroneiki",
        true,
        false,
        vec![offset_point(&ORIGIN, 15.0, 0.0)],
    ));

    let mut notifier = RecordingNotifier::default();
    let effects = engine.handle_location(&ORIGIN, &mut notifier);

    assert_eq!(effects.len(), 1);
    assert_eq!(notifier.alerts.len(), 1);
    assert_eq!(notifier.alerts[0].0, "Organic Grove Nearby");
    assert_eq!(notifier.alerts[0].1, "Owner: Eleni, Olive Variety: Koroneiki");

    // Notifications do not mutate grove state: walking by again re-notifies.
    engine.handle_location(&ORIGIN, &mut notifier);
    assert_eq!(notifier.alerts.len(), 2);
}

#[test]
fn test_select_nearest() {
    let mut engine = GroveEngine::new();
    engine.add_grove(untracked_grove(vec![offset_point(&ORIGIN, 1_000.0, 0.0)]));
    let near_key = engine.add_grove(untracked_grove(vec![offset_point(&ORIGIN, 10.0, 0.0)]));

    let nearest = engine.select_nearest(&ORIGIN).unwrap();
    assert_eq!(nearest.key.as_deref(), Some(near_key.as_str()));
}

#[test]
fn test_spatial_queries() {
    let mut engine = GroveEngine::new();
    let near_key = engine.add_grove(untracked_grove(vec![ORIGIN]));
    engine.add_grove(untracked_grove(vec![offset_point(&ORIGIN, 2_000.0, 0.0)]));

    let nearby = engine.find_nearby(ORIGIN.latitude, ORIGIN.longitude, 100.0);
    assert_eq!(nearby, vec![near_key]);

    let all = engine.query_viewport(&Bounds {
        min_lat: 37.0,
        max_lat: 38.0,
        min_lng: 26.0,
        max_lng: 27.0,
    });
    assert_eq!(all.len(), 2);
}

#[test]
fn test_groves_geojson() {
    let mut engine = GroveEngine::new();
    engine.add_grove(Grove::new("Eleni", "Koroneiki", true, false, vec![ORIGIN]));

    let geojson = engine.groves_geojson().unwrap();
    assert!(geojson.contains("FeatureCollection"));
    assert!(geojson.contains("marker-green"));
}

#[test]
fn test_clear() {
    let mut engine = GroveEngine::new();
    engine.add_grove(untracked_grove(vec![ORIGIN]));
    engine.clear();

    assert_eq!(engine.grove_count(), 0);
    assert!(engine.select_nearest(&ORIGIN).is_none());
}
