//! Geographic utilities: distance, center, and unit conversions.
//!
//! All distances are geodesic (great-circle) meters. The same metric is used
//! for nearest-grove selection and for the proximity radius checks, so the
//! two are always consistent.

use crate::GeoPoint;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Geometric center of a set of points (0,0 for an empty set).
pub fn compute_center(points: &[GeoPoint]) -> GeoPoint {
    if points.is_empty() {
        return GeoPoint::new(0.0, 0.0);
    }

    let lat_sum: f64 = points.iter().map(|p| p.latitude).sum();
    let lng_sum: f64 = points.iter().map(|p| p.longitude).sum();

    GeoPoint::new(lat_sum / points.len() as f64, lng_sum / points.len() as f64)
}

/// Convert a distance in meters to degrees of longitude at a given latitude.
///
/// Used to turn metric search radii into degree-based bounding boxes for
/// the spatial index.
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    let meters_per_degree = 111_320.0 * latitude.to_radians().cos();
    if meters_per_degree <= 0.0 {
        return 0.0;
    }
    meters / meters_per_degree
}
