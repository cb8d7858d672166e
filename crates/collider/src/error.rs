//! Collider error types.

use thiserror::Error;

/// Errors raised by shape construction and type-erased shape operations.
#[derive(Debug, Error)]
pub enum ColliderError {
    /// Polygon constructed with fewer than 3 vertices.
    #[error("polygon colliders need at least 3 vertices (got {0})")]
    DegenerateGeometry(usize),

    /// Rotation requested on a shape that has no angle.
    #[error("`{operation}` is only supported by polygon colliders, not by a {shape} collider")]
    UnsupportedOperation {
        shape: &'static str,
        operation: &'static str,
    },
}
