//! Convex polygon collider.

use canvas::Canvas;
use glam::Vec2;

use crate::bbox::BoundingRect;
use crate::error::ColliderError;

/// A convex polygon defined by at least 3 vertices.
///
/// The constructor vertices are kept as an immutable local-space template;
/// rotation is always applied to the template (not accumulated into the
/// world vertices) so repeated rotation never drifts. World-space vertices
/// and both bounding boxes are recomputed eagerly on every mutation, so
/// `points[i] == rotated_points[i] + position` holds between calls.
///
/// Convexity is assumed, not validated: the separating-axis and
/// point-containment tests silently produce wrong answers for concave
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCollider {
    points: Vec<Vec2>,
    local_points: Vec<Vec2>,
    rotated_points: Vec<Vec2>,
    position: Vec2,
    angle: f32,
    bbox: BoundingRect,
    rotated_bbox: BoundingRect,
}

impl PolygonCollider {
    /// Builds a polygon from local-space vertices placed at `position`.
    ///
    /// Vertex order is winding order. Fewer than 3 vertices is
    /// [`ColliderError::DegenerateGeometry`].
    pub fn new(vertices: &[Vec2], position: Vec2) -> Result<Self, ColliderError> {
        if vertices.len() < 3 {
            return Err(ColliderError::DegenerateGeometry(vertices.len()));
        }

        let rotated_bbox = BoundingRect::from_points(vertices);
        let mut polygon = Self {
            points: vertices.to_vec(),
            local_points: vertices.to_vec(),
            rotated_points: vertices.to_vec(),
            position: Vec2::ZERO,
            angle: 0.0,
            bbox: rotated_bbox,
            rotated_bbox,
        };
        polygon.set_position(position);
        Ok(polygon)
    }

    /// Current world-space vertices, in winding order.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Cached world-space bounding box.
    #[inline]
    pub fn bbox(&self) -> BoundingRect {
        self.bbox
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current rotation in radians; 0 at construction.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        for (world, rotated) in self.points.iter_mut().zip(&self.rotated_points) {
            *world = *rotated + position;
        }
        self.bbox = self.rotated_bbox.shifted(position);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for p in &mut self.points {
            *p += delta;
        }
        self.bbox = self.bbox.shifted(delta);
    }

    /// Rotates the polygon to an absolute angle (radians).
    pub fn set_angle(&mut self, angle: f32) {
        let rotation = Vec2::from_angle(angle);
        for (rotated, local) in self.rotated_points.iter_mut().zip(&self.local_points) {
            *rotated = rotation.rotate(*local);
        }
        self.angle = angle;
        self.rotated_bbox = BoundingRect::from_points(&self.rotated_points);
        self.set_position(self.position);
    }

    /// Rotates the polygon by an angle relative to its current one.
    pub fn rotate_by(&mut self, delta: f32) {
        let rotation = Vec2::from_angle(delta);
        for rotated in &mut self.rotated_points {
            *rotated = rotation.rotate(*rotated);
        }
        self.angle += delta;
        self.rotated_bbox = BoundingRect::from_points(&self.rotated_points);
        self.set_position(self.position);
    }

    /// Average of the world-space vertices; the centroid of a convex
    /// polygon with evenly distributed vertices.
    pub fn centroid(&self) -> Vec2 {
        let sum: Vec2 = self.points.iter().copied().sum();
        sum / self.points.len() as f32
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.polygon(&self.points);
    }
}
