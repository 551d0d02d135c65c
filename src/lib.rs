//! # grovetrack
//!
//! Proximity tracking engine for crowdsourced olive grove mapping.
//!
//! This library provides:
//! - Nearest-grove matching over per-vertex geodesic distances
//! - Proximity effects: auto-mark sprayed, organic-grove notifications
//! - In-memory grove store with full-replace edit semantics
//! - R-tree spatial index for viewport queries
//! - Location watcher loop with drop-stale sample handling
//! - GeoJSON marker export for map rendering
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel nearest-grove scans with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use grovetrack::proximity::{coalesce, evaluate};
//! use grovetrack::{GeoPoint, Grove, ProximityConfig};
//!
//! let grove = Grove::new(
//!     "Eleni",
//!     "Koroneiki",
//!     true,  // organic
//!     false, // sprayed
//!     vec![GeoPoint::new(37.7909, 26.7042)],
//! );
//!
//! // Standing on a grove vertex: within the 20m organic alert radius.
//! let here = GeoPoint::new(37.7909, 26.7042);
//! let effects = coalesce(evaluate(&here, &[grove], &ProximityConfig::default()));
//! assert_eq!(effects.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{GroveTrackError, OptionExt, Result};

// Geographic utilities (distance, center, unit conversions)
pub mod geo_utils;

// Proximity evaluation (nearest-grove matching and effect emission)
pub mod proximity;
pub use proximity::{coalesce, evaluate, nearest_grove, ProximityEffect};

// Boundary draft editing
pub mod draft;
pub use draft::BoundaryDraft;

// Grove engine with store, spatial index, and effect dispatch
pub mod engine;
pub use engine::{EditOutcome, GroveEngine, GroveStore, SpatialIndex};

// GeoJSON marker rendering
pub mod render;

// Location subscription loop and notification seam
pub mod watcher;
pub use watcher::{LogNotifier, Notifier, SampleSlot};

// Synthetic grove data generator for tests and benchmarks
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use grovetrack::GeoPoint;
/// let point = GeoPoint::new(37.7909, 26.7042); // Samos
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// A single location reading from the location provider.
///
/// Ephemeral: produced by the location stream, evaluated, never persisted.
pub type LocationSample = GeoPoint;

/// A named, owned parcel with boundary vertices and cultivation-status flags.
///
/// `organic` and `sprayed` are mutually exclusive in the UI but the data
/// model does not enforce it. `key` is `None` until the grove is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grove {
    /// Store-assigned identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Owner name
    pub owner: String,
    /// Olive variety name
    pub variety: String,
    /// Certified organic
    #[serde(default)]
    pub organic: bool,
    /// Marked as sprayed
    #[serde(default)]
    pub sprayed: bool,
    /// Ordered boundary vertices
    #[serde(default)]
    pub coordinates: Vec<GeoPoint>,
}

impl Grove {
    /// Create an unpersisted grove (no store key yet).
    pub fn new(
        owner: impl Into<String>,
        variety: impl Into<String>,
        organic: bool,
        sprayed: bool,
        coordinates: Vec<GeoPoint>,
    ) -> Self {
        Self {
            key: None,
            owner: owner.into(),
            variety: variety.into(),
            organic,
            sprayed,
            coordinates,
        }
    }

    /// Minimum geodesic distance in meters from `point` to any boundary vertex.
    ///
    /// Returns infinity for a grove with an empty coordinate list, which
    /// excludes it from nearest-grove selection.
    pub fn min_distance_to(&self, point: &GeoPoint) -> f64 {
        self.coordinates
            .iter()
            .map(|coordinate| geo_utils::haversine_distance(coordinate, point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Bounding box over the boundary vertices, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.coordinates)
    }

    /// Map marker image name for this grove's status.
    pub fn marker(&self) -> &'static str {
        if self.organic {
            "marker-green"
        } else if self.sprayed {
            "marker-blue"
        } else {
            "marker-red"
        }
    }

    /// Two-line map label: owner name with the variety in parentheses.
    pub fn label(&self) -> String {
        format!("{}\n({})", self.owner, self.variety)
    }
}

/// Bounding box for a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from geographic points.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Configuration for proximity evaluation and boundary editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Radius in meters within which an untracked grove is auto-marked sprayed.
    /// Default: 10.0 meters
    pub auto_spray_radius: f64,

    /// Radius in meters within which an organic grove triggers a notification.
    /// Default: 20.0 meters
    pub organic_alert_radius: f64,

    /// Radius in meters for picking the nearest boundary vertex during edits.
    /// Default: 40.0 meters
    pub vertex_pick_radius: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            auto_spray_radius: 10.0,
            organic_alert_radius: 20.0,
            vertex_pick_radius: 40.0,
        }
    }
}
