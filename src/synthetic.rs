//! Synthetic grove data generator for tests and benchmarks.
//!
//! Generates seeded grove fields around an origin point and straight-line
//! walking tracks between points, so proximity behavior can be exercised
//! against datasets with known geometry.
//!
//! # Example
//!
//! ```rust
//! use grovetrack::synthetic::GroveField;
//! use grovetrack::GeoPoint;
//!
//! let field = GroveField {
//!     origin: GeoPoint::new(37.7909, 26.7042),
//!     grove_count: 50,
//!     ..GroveField::default()
//! };
//!
//! let groves = field.generate();
//! assert_eq!(groves.len(), 50);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{GeoPoint, Grove};

/// Olive varieties cycled through generated groves.
const VARIETIES: [&str; 4] = ["Koroneiki", "Kalamata", "Arbequina", "Picual"];

/// Meters of longitude per degree at the equator.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Configuration for a generated field of groves.
#[derive(Debug, Clone)]
pub struct GroveField {
    /// Center of the field.
    pub origin: GeoPoint,
    /// Number of groves to generate.
    pub grove_count: usize,
    /// Boundary vertices per grove.
    pub vertices_per_grove: usize,
    /// Grid spacing between grove centers in meters.
    pub spacing_meters: f64,
    /// Vertex jitter radius around each grove center in meters.
    pub jitter_meters: f64,
    /// Fraction of groves flagged organic (0.0-1.0).
    pub organic_fraction: f64,
    /// Fraction of groves flagged sprayed (0.0-1.0), drawn from the
    /// non-organic remainder.
    pub sprayed_fraction: f64,
    /// RNG seed for reproducible fields.
    pub seed: u64,
}

impl Default for GroveField {
    fn default() -> Self {
        Self {
            origin: GeoPoint::new(37.7909, 26.7042),
            grove_count: 100,
            vertices_per_grove: 4,
            spacing_meters: 200.0,
            jitter_meters: 15.0,
            organic_fraction: 0.3,
            sprayed_fraction: 0.3,
            seed: 42,
        }
    }
}

impl GroveField {
    /// Generate the grove field.
    ///
    /// Groves are laid out on a square grid centered on `origin`, each with
    /// jittered boundary vertices and a fresh `grove-N` style key.
    pub fn generate(&self) -> Vec<Grove> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let side = (self.grove_count as f64).sqrt().ceil() as usize;
        let half = side as f64 / 2.0;

        (0..self.grove_count)
            .map(|i| {
                let row = (i / side) as f64 - half;
                let col = (i % side) as f64 - half;
                let center = offset_point(
                    &self.origin,
                    col * self.spacing_meters,
                    row * self.spacing_meters,
                );

                let coordinates: Vec<GeoPoint> = (0..self.vertices_per_grove)
                    .map(|_| {
                        let east = rng.gen_range(-self.jitter_meters..=self.jitter_meters);
                        let north = rng.gen_range(-self.jitter_meters..=self.jitter_meters);
                        offset_point(&center, east, north)
                    })
                    .collect();

                let roll: f64 = rng.gen();
                let organic = roll < self.organic_fraction;
                let sprayed = !organic && roll < self.organic_fraction + self.sprayed_fraction;

                let mut grove = Grove::new(
                    format!("owner-{}", i),
                    VARIETIES[i % VARIETIES.len()],
                    organic,
                    sprayed,
                    coordinates,
                );
                grove.key = Some(format!("grove-{}", i + 1));
                grove
            })
            .collect()
    }
}

/// Offset a point by meters east and north.
pub fn offset_point(origin: &GeoPoint, east_meters: f64, north_meters: f64) -> GeoPoint {
    let dlat = north_meters / METERS_PER_DEGREE;
    let dlng = east_meters / (METERS_PER_DEGREE * origin.latitude.to_radians().cos());
    GeoPoint::new(origin.latitude + dlat, origin.longitude + dlng)
}

/// A straight walking track between two points with `steps` samples,
/// endpoints included.
pub fn straight_walk(from: &GeoPoint, to: &GeoPoint, steps: usize) -> Vec<GeoPoint> {
    if steps < 2 {
        return vec![*from];
    }

    (0..steps)
        .map(|i| {
            let ratio = i as f64 / (steps - 1) as f64;
            GeoPoint::new(
                from.latitude + ratio * (to.latitude - from.latitude),
                from.longitude + ratio * (to.longitude - from.longitude),
            )
        })
        .collect()
}
