//! Spatial indexing for map viewport queries.
//!
//! Uses an R-tree to efficiently query groves by geographic bounds.

use rstar::{RTree, RTreeObject, AABB};

use crate::Bounds;

use super::grove_store::GroveStore;

/// Grove bounds wrapper for R-tree spatial indexing.
#[derive(Debug, Clone)]
pub struct GroveBounds {
    pub key: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl RTreeObject for GroveBounds {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_lng, self.min_lat], [self.max_lng, self.max_lat])
    }
}

/// Spatial index over grove bounding boxes.
///
/// Maintains an R-tree with dirty tracking so the index is rebuilt from the
/// store only when grove boundaries have changed.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<GroveBounds>,
    dirty: bool,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex {
    /// Create a new empty spatial index.
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            dirty: false,
        }
    }

    /// Mark the index as needing rebuild.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if the index needs rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the index from the grove store.
    ///
    /// Groves with empty boundaries have no bounds and are not indexed.
    pub fn rebuild(&mut self, store: &GroveStore) {
        let bounds: Vec<GroveBounds> = store
            .values()
            .filter_map(|grove| {
                let key = grove.key.clone()?;
                grove.bounds().map(|b| GroveBounds {
                    key,
                    min_lat: b.min_lat,
                    max_lat: b.max_lat,
                    min_lng: b.min_lng,
                    max_lng: b.max_lng,
                })
            })
            .collect();

        self.tree = RTree::bulk_load(bounds);
        self.dirty = false;
    }

    /// Ensure the index is up to date.
    pub fn ensure_built(&mut self, store: &GroveStore) {
        if self.dirty {
            self.rebuild(store);
        }
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.dirty = false;
    }

    /// Query grove keys within a viewport.
    pub fn query_viewport(&self, bounds: &Bounds) -> Vec<String> {
        let search_bounds = AABB::from_corners(
            [bounds.min_lng, bounds.min_lat],
            [bounds.max_lng, bounds.max_lat],
        );

        self.tree
            .locate_in_envelope_intersecting(&search_bounds)
            .map(|b| b.key.clone())
            .collect()
    }

    /// Find grove keys near a point.
    pub fn find_nearby(&self, lat: f64, lng: f64, radius_degrees: f64) -> Vec<String> {
        self.query_viewport(&Bounds {
            min_lat: lat - radius_degrees,
            max_lat: lat + radius_degrees,
            min_lng: lng - radius_degrees,
            max_lng: lng + radius_degrees,
        })
    }

    /// Get the number of indexed groves.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
