//! Typed service error.

use thiserror::Error;

/// Failure surfaced by the introspection layer.
///
/// Empty results are success, unknown parameters are ignored, and
/// malformed pagination falls back to defaults; the only propagated
/// failure is serialization of a final response payload. Nothing here is
/// fatal to the hosting process.
#[derive(Debug, Error)]
pub enum InspectError {
    /// A response payload could not be serialized.
    #[error("response serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
