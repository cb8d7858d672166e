//! Circle collider.

use canvas::Canvas;
use glam::Vec2;

use crate::bbox::BoundingRect;

/// A circle with a cached squared radius.
///
/// The squared radius is kept in lockstep with the radius so distance
/// comparisons never pay for a square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    position: Vec2,
    radius: f32,
    radius_sq: f32,
}

impl CircleCollider {
    pub fn new(position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle collider radius must be positive");
        Self {
            position,
            radius,
            radius_sq: radius * radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn radius_sq(&self) -> f32 {
        self.radius_sq
    }

    pub fn set_radius(&mut self, radius: f32) {
        debug_assert!(radius > 0.0, "circle collider radius must be positive");
        self.radius = radius;
        self.radius_sq = radius * radius;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// The circle's axis-aligned bounding box, used for pruning against
    /// polygon boxes.
    pub fn bbox(&self) -> BoundingRect {
        BoundingRect::new(
            self.position.x - self.radius,
            self.position.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.position, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_sq_stays_in_sync() {
        let mut circle = CircleCollider::new(Vec2::ZERO, 3.0);
        assert_eq!(circle.radius_sq(), 9.0);

        circle.set_radius(5.0);
        assert_eq!(circle.radius_sq(), 25.0);
    }

    #[test]
    fn test_bbox() {
        let circle = CircleCollider::new(Vec2::new(10.0, 20.0), 4.0);
        let bbox = circle.bbox();

        assert_eq!(bbox, BoundingRect::new(6.0, 16.0, 8.0, 8.0));
    }
}
