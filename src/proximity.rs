//! Proximity evaluation: nearest-grove matching and effect emission.
//!
//! This is the core of the crate. Given a location sample and a snapshot of
//! the grove list, [`evaluate`] selects the nearest grove by per-vertex
//! geodesic distance and emits at most one kind of effect:
//!
//! - Untracked grove (neither organic nor sprayed) within the auto-spray
//!   radius: a [`ProximityEffect::MarkSprayed`] mutation.
//! - Organic grove within the alert radius: a [`ProximityEffect::Notify`].
//! - Sprayed grove: nothing.
//!
//! Evaluation is pure and synchronous. Effects are descriptions; the caller
//! (typically [`crate::GroveEngine`]) owns dispatch and failure handling.

use crate::geo_utils::haversine_distance;
use crate::{GeoPoint, Grove, ProximityConfig};

/// Notification title for the organic-grove alert.
pub const ORGANIC_ALERT_TITLE: &str = "Organic Grove Nearby";

/// Grove count above which the parallel scan is used (with the `parallel`
/// feature enabled).
#[cfg(feature = "parallel")]
const PARALLEL_SCAN_THRESHOLD: usize = 256;

/// A side-effecting action triggered by nearness to a grove.
///
/// Effects are emitted per boundary vertex in range, so one evaluation may
/// produce several identical entries. [`coalesce`] reduces them to the net
/// form, which is what callers should apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityEffect {
    /// Full-replace mutation marking the grove as sprayed.
    MarkSprayed {
        /// Store key of the grove to update.
        key: String,
        /// Replacement grove state with `organic=false, sprayed=true`.
        grove: Grove,
    },
    /// Fire-and-forget notification for the notification sink.
    Notify { title: String, body: String },
}

/// Select the grove nearest to `location` by minimum per-vertex distance.
///
/// Groves with empty coordinate lists have infinite distance and are never
/// selected. Ties are broken by the first grove encountered in iteration
/// order. Returns `None` when no grove has a finite distance.
pub fn nearest_grove<'a>(location: &GeoPoint, groves: &'a [Grove]) -> Option<&'a Grove> {
    groves
        .iter()
        .map(|grove| (grove, grove.min_distance_to(location)))
        .filter(|(_, distance)| distance.is_finite())
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(grove, _)| grove)
}

/// Parallel variant of [`nearest_grove`] for large grove sets.
///
/// Tie-breaking between equidistant groves is unspecified here, unlike the
/// serial scan.
#[cfg(feature = "parallel")]
pub fn nearest_grove_parallel<'a>(location: &GeoPoint, groves: &'a [Grove]) -> Option<&'a Grove> {
    use rayon::prelude::*;

    groves
        .par_iter()
        .map(|grove| (grove, grove.min_distance_to(location)))
        .filter(|(_, distance)| distance.is_finite())
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(grove, _)| grove)
}

fn select_nearest<'a>(location: &GeoPoint, groves: &'a [Grove]) -> Option<&'a Grove> {
    #[cfg(feature = "parallel")]
    if groves.len() >= PARALLEL_SCAN_THRESHOLD {
        return nearest_grove_parallel(location, groves);
    }

    nearest_grove(location, groves)
}

/// Evaluate a location sample against a grove snapshot.
///
/// Pure and side-effect free: returns effect descriptions only. An invalid
/// location (non-finite or out-of-range coordinates) short-circuits to an
/// empty list, as does an empty or all-empty-boundary grove list.
///
/// Effects are emitted once per vertex in range. Apply [`coalesce`] for the
/// idempotent net form.
pub fn evaluate(
    location: &GeoPoint,
    groves: &[Grove],
    config: &ProximityConfig,
) -> Vec<ProximityEffect> {
    if !location.is_valid() {
        return Vec::new();
    }

    let Some(nearest) = select_nearest(location, groves) else {
        return Vec::new();
    };

    let mut effects = Vec::new();

    if !nearest.sprayed && !nearest.organic {
        // An unpersisted grove has no key to update against.
        let Some(key) = nearest.key.as_deref() else {
            return effects;
        };

        for coordinate in &nearest.coordinates {
            if haversine_distance(coordinate, location) < config.auto_spray_radius {
                let mut updated = nearest.clone();
                updated.organic = false;
                updated.sprayed = true;
                effects.push(ProximityEffect::MarkSprayed {
                    key: key.to_string(),
                    grove: updated,
                });
            }
        }
    } else if nearest.organic {
        for coordinate in &nearest.coordinates {
            if haversine_distance(coordinate, location) < config.organic_alert_radius {
                effects.push(ProximityEffect::Notify {
                    title: ORGANIC_ALERT_TITLE.to_string(),
                    body: format!(
                        "Owner: {}, Olive Variety: {}",
                        nearest.owner, nearest.variety
                    ),
                });
            }
        }
    }

    effects
}

/// Reduce per-vertex effect emissions to their net form.
///
/// Order-preserving dedup: multiple vertices of the same grove in range
/// net to a single mutation or notification.
pub fn coalesce(effects: Vec<ProximityEffect>) -> Vec<ProximityEffect> {
    let mut net: Vec<ProximityEffect> = Vec::new();
    for effect in effects {
        if !net.contains(&effect) {
            net.push(effect);
        }
    }
    net
}
