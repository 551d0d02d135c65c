//! Tests for geo_utils module

use grovetrack::geo_utils::*;
use grovetrack::synthetic::offset_point;
use grovetrack::GeoPoint;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    let p = GeoPoint::new(37.7909, 26.7042);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let london = GeoPoint::new(51.5074, -0.1278);
    let paris = GeoPoint::new(48.8566, 2.3522);
    let dist = haversine_distance(&london, &paris);
    assert!(approx_eq(dist, 343_560.0, 5000.0)); // Within 5km
}

#[test]
fn test_haversine_distance_small_offset() {
    let origin = GeoPoint::new(37.7909, 26.7042);
    let moved = offset_point(&origin, 10.0, 0.0);
    let dist = haversine_distance(&origin, &moved);
    assert!(approx_eq(dist, 10.0, 0.1));
}

#[test]
fn test_compute_center() {
    let points = vec![GeoPoint::new(37.78, 26.70), GeoPoint::new(37.80, 26.72)];
    let center = compute_center(&points);
    assert!(approx_eq(center.latitude, 37.79, 0.001));
    assert!(approx_eq(center.longitude, 26.71, 0.001));
}

#[test]
fn test_compute_center_empty() {
    let empty: Vec<GeoPoint> = vec![];
    let center = compute_center(&empty);
    assert_eq!(center.latitude, 0.0);
    assert_eq!(center.longitude, 0.0);
}

#[test]
fn test_meters_to_degrees() {
    // At equator, 111km = 1 degree
    let deg = meters_to_degrees(111_320.0, 0.0);
    assert!(approx_eq(deg, 1.0, 0.01));

    // At higher latitude, same distance = more degrees
    let deg_45 = meters_to_degrees(111_320.0, 45.0);
    assert!(deg_45 > 1.0);
}
