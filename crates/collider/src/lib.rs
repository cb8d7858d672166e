//! Narrow-phase 2D collision detection.
//!
//! Four collider shapes (point, line segment, circle, convex polygon),
//! pairwise intersection tests between all of them, and minimum
//! translation vectors via the separating axis theorem, pruned by cached
//! axis-aligned bounding boxes.
//!
//! Shapes are built once, repositioned or rotated in place each tick, and
//! queried through [`Collider::check`] / [`Collider::is_colliding`].
//! Queries are read-only and reentrant; callers serialize mutation against
//! querying (normally by doing both on the simulation-tick thread).

mod bbox;
mod error;
pub mod narrow;
pub mod resolve;
mod shapes;

pub use bbox::BoundingRect;
pub use error::ColliderError;
pub use shapes::{
    CircleCollider, Collider, Contact, LineCollider, PointCollider, PolygonCollider,
};
