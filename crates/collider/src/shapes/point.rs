//! Point collider.

use canvas::Canvas;
use glam::Vec2;

/// A single point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCollider {
    pub position: Vec2,
}

impl PointCollider {
    pub const fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.point(self.position);
    }
}
