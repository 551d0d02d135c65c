//! GeoJSON marker rendering for the map layer.
//!
//! Each grove vertex becomes one Point feature carrying the marker image
//! name for the grove's status and a two-line owner/variety label. Draft
//! vertices render with the black editing marker and no label.

use serde_json::{json, Value};

use crate::draft::BoundaryDraft;
use crate::{Grove, Result};

/// Marker image name for draft (in-progress) vertices.
pub const MARKER_DRAFT: &str = "marker-black";

/// Build a GeoJSON FeatureCollection of grove markers.
pub fn grove_features(groves: &[Grove]) -> Value {
    let features: Vec<Value> = groves
        .iter()
        .flat_map(|grove| {
            grove.coordinates.iter().map(move |coordinate| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [coordinate.longitude, coordinate.latitude],
                    },
                    "properties": {
                        "title": grove.label(),
                        "marker": grove.marker(),
                    },
                })
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Build a GeoJSON FeatureCollection of draft vertex markers.
pub fn draft_features(draft: &BoundaryDraft) -> Value {
    let features: Vec<Value> = draft
        .points()
        .iter()
        .map(|coordinate| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [coordinate.longitude, coordinate.latitude],
                },
                "properties": {
                    "marker": MARKER_DRAFT,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Serialize grove markers to a pretty-printed GeoJSON string.
pub fn groves_to_geojson(groves: &[Grove]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&grove_features(groves))?)
}
