//! # Grove Engine
//!
//! Composition root tying the grove store, spatial index, and proximity
//! evaluator together.
//!
//! ## Architecture
//!
//! - `GroveStore` - grove CRUD with store-generated keys
//! - `SpatialIndex` - R-tree for viewport queries
//! - snapshot cache - owned grove list handed to the pure evaluator
//!
//! The engine is the effect dispatcher: mutation effects go back into the
//! store, notification effects go to the [`Notifier`] seam. Dispatch
//! failures are logged and never surface through the evaluation result.

pub mod grove_store;
pub mod spatial_index;

pub use grove_store::{EditOutcome, GroveStore};
pub use spatial_index::{GroveBounds, SpatialIndex};

use log::{debug, warn};

use crate::proximity::{self, ProximityEffect};
use crate::watcher::Notifier;
use crate::{geo_utils, render, Bounds, GeoPoint, Grove, LocationSample, ProximityConfig, Result};

/// Grove engine composing storage, spatial queries, and proximity effects.
pub struct GroveEngine {
    store: GroveStore,
    spatial: SpatialIndex,

    // Snapshot handed to the evaluator, refreshed on mutation
    snapshot: Vec<Grove>,
    snapshot_dirty: bool,

    config: ProximityConfig,
}

impl Default for GroveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GroveEngine {
    /// Create a new engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProximityConfig::default())
    }

    /// Create a new engine with custom proximity configuration.
    pub fn with_config(config: ProximityConfig) -> Self {
        Self {
            store: GroveStore::new(),
            spatial: SpatialIndex::new(),
            snapshot: Vec::new(),
            snapshot_dirty: false,
            config,
        }
    }

    // ========================================================================
    // Grove Lifecycle (delegates to GroveStore)
    // ========================================================================

    /// Persist a grove, returning its store key.
    pub fn add_grove(&mut self, grove: Grove) -> String {
        let key = self.store.create(grove);
        self.mark_mutated();
        key
    }

    /// Save an edited grove: full replace, or delete when its boundary is empty.
    pub fn edit_grove(&mut self, key: &str, grove: Grove) -> Result<EditOutcome> {
        let outcome = self.store.save_edit(key, grove)?;
        self.mark_mutated();
        Ok(outcome)
    }

    /// Remove a grove, returning it.
    pub fn remove_grove(&mut self, key: &str) -> Result<Grove> {
        let grove = self.store.delete(key)?;
        self.mark_mutated();
        Ok(grove)
    }

    /// Get a grove by key.
    pub fn grove(&self, key: &str) -> Option<&Grove> {
        self.store.get(key)
    }

    /// Get all grove keys.
    pub fn grove_keys(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }

    /// Get the number of stored groves.
    pub fn grove_count(&self) -> usize {
        self.store.len()
    }

    /// Clear all groves and reset state.
    pub fn clear(&mut self) {
        self.store.clear();
        self.spatial.clear();
        self.snapshot.clear();
        self.snapshot_dirty = false;
    }

    // ========================================================================
    // Proximity Evaluation
    // ========================================================================

    /// Handle a location update: evaluate, coalesce, and dispatch effects.
    ///
    /// Mutation effects are applied to the store; notification effects go to
    /// `notifier`. Returns the net effects that were dispatched.
    pub fn handle_location(
        &mut self,
        sample: &LocationSample,
        notifier: &mut dyn Notifier,
    ) -> Vec<ProximityEffect> {
        self.ensure_snapshot();

        let effects =
            proximity::coalesce(proximity::evaluate(sample, &self.snapshot, &self.config));

        for effect in &effects {
            match effect {
                ProximityEffect::MarkSprayed { key, grove } => {
                    match self.store.update(key, grove.clone()) {
                        Ok(()) => {
                            debug!("grove '{}' auto-marked sprayed", key);
                            self.mark_mutated();
                        }
                        Err(e) => warn!("auto-spray update for grove '{}' failed: {}", key, e),
                    }
                }
                ProximityEffect::Notify { title, body } => notifier.notify(title, body),
            }
        }

        effects
    }

    /// Select the grove nearest to a point, e.g. for tap-to-edit selection.
    pub fn select_nearest(&mut self, point: &GeoPoint) -> Option<&Grove> {
        self.ensure_snapshot();
        proximity::nearest_grove(point, &self.snapshot)
    }

    // ========================================================================
    // Spatial Queries (delegates to SpatialIndex)
    // ========================================================================

    /// Query grove keys intersecting a viewport.
    pub fn query_viewport(&mut self, bounds: &Bounds) -> Vec<String> {
        self.spatial.ensure_built(&self.store);
        self.spatial.query_viewport(bounds)
    }

    /// Find grove keys within a metric radius of a point.
    pub fn find_nearby(&mut self, lat: f64, lng: f64, radius_meters: f64) -> Vec<String> {
        self.spatial.ensure_built(&self.store);
        let radius_degrees = geo_utils::meters_to_degrees(radius_meters, lat);
        self.spatial.find_nearby(lat, lng, radius_degrees)
    }

    // ========================================================================
    // Rendering & Configuration
    // ========================================================================

    /// GeoJSON FeatureCollection of grove markers for the map layer.
    pub fn groves_geojson(&mut self) -> Result<String> {
        self.ensure_snapshot();
        render::groves_to_geojson(&self.snapshot)
    }

    /// Get the current proximity configuration.
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Update the proximity configuration.
    pub fn set_config(&mut self, config: ProximityConfig) {
        self.config = config;
    }

    fn ensure_snapshot(&mut self) {
        if self.snapshot_dirty {
            self.snapshot = self.store.snapshot();
            self.snapshot_dirty = false;
        }
    }

    fn mark_mutated(&mut self) {
        self.snapshot_dirty = true;
        self.spatial.mark_dirty();
    }
}
