//! Boundary draft editing.
//!
//! Holds the in-progress coordinate list while a grove boundary is being
//! drawn or edited on the map: tapping adds a vertex, tapping in delete
//! mode removes the nearest draft vertex if it is within the pick radius.

use crate::geo_utils::haversine_distance;
use crate::GeoPoint;

/// An in-progress grove boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryDraft {
    points: Vec<GeoPoint>,
}

impl BoundaryDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft from an existing boundary (edit flow).
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Append a vertex to the draft.
    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Remove the draft vertex nearest to `point`, but only when it lies
    /// within `pick_radius_meters`. Returns the removed vertex.
    pub fn remove_nearest(&mut self, point: &GeoPoint, pick_radius_meters: f64) -> Option<GeoPoint> {
        let (index, distance) = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, haversine_distance(p, point)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if distance < pick_radius_meters {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Discard all draft vertices.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The draft vertices in insertion order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consume the draft into its coordinate list.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Get the number of draft vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the draft is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
