//! Unified error handling for grovetrack.

use thiserror::Error;

/// Result type alias using [`GroveTrackError`].
pub type Result<T> = std::result::Result<T, GroveTrackError>;

/// Errors produced by the grove store and tooling.
///
/// The proximity evaluator itself is infallible: malformed location samples
/// short-circuit to an empty effect list instead of erroring.
#[derive(Debug, Error)]
pub enum GroveTrackError {
    /// The store has no grove under the given key.
    #[error("grove '{key}' not found in store")]
    GroveNotFound { key: String },

    /// JSON serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O failed (CLI input/output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extension trait for converting `Option` lookups into store errors.
pub trait OptionExt<T> {
    /// Convert `None` into [`GroveTrackError::GroveNotFound`].
    fn ok_or_grove_not_found(self, key: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_grove_not_found(self, key: &str) -> Result<T> {
        self.ok_or_else(|| GroveTrackError::GroveNotFound {
            key: key.to_string(),
        })
    }
}
