//! Axis-aligned bounding boxes.

use glam::Vec2;

/// An axis-aligned bounding box; `x, y` is the top-left corner.
///
/// Derived from the owning shape's geometry and recomputed whenever that
/// geometry changes, never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoundingRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point in `points`.
    ///
    /// Panics on an empty slice; a bounding box of nothing is meaningless.
    pub fn from_points(points: &[Vec2]) -> Self {
        assert!(!points.is_empty(), "bounding box of an empty point list");

        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for p in points {
            if p.x < min_x {
                min_x = p.x;
            }
            if p.x > max_x {
                max_x = p.x;
            }
            if p.y < min_y {
                min_y = p.y;
            }
            if p.y > max_y {
                max_y = p.y;
            }
        }

        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Check if two boxes overlap. Touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &BoundingRect) -> bool {
        !(other.x > self.x + self.w
            || other.x + other.w < self.x
            || other.y > self.y + self.h
            || other.y + other.h < self.y)
    }

    /// This box translated by `offset`.
    #[inline]
    pub fn shifted(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = BoundingRect::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingRect::new(5.0, 5.0, 10.0, 10.0);
        let c = BoundingRect::new(20.0, 20.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = BoundingRect::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingRect::new(10.0, 0.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_from_points() {
        let bbox = BoundingRect::from_points(&[
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(1.0, 1.0),
        ]);

        assert_eq!(bbox, BoundingRect::new(-2.0, -1.0, 5.0, 5.0));
    }

    #[test]
    #[should_panic]
    fn test_from_no_points_panics() {
        BoundingRect::from_points(&[]);
    }

    #[test]
    fn test_shifted() {
        let bbox = BoundingRect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            bbox.shifted(Vec2::new(10.0, 20.0)),
            BoundingRect::new(11.0, 22.0, 3.0, 4.0)
        );
    }
}
