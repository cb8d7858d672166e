//! Static image sprites.

use canvas::{Canvas, SourceRect, TextureInfo};
use glam::Vec2;

/// A single-image sprite with position, anchor, rotation, and scale.
#[derive(Debug, Clone)]
pub struct ImageSprite {
    texture: TextureInfo,
    pub position: Vec2,
    /// Pixel offset within the source image that `position` maps to.
    pub anchor: Vec2,
    pub rotation: f32,
    scale: Vec2,
}

impl ImageSprite {
    pub(crate) fn new(
        texture: TextureInfo,
        position: Vec2,
        anchor: Vec2,
        rotation: f32,
        scale: Vec2,
    ) -> Self {
        Self {
            texture,
            position,
            anchor,
            rotation,
            scale,
        }
    }

    pub fn source_width(&self) -> f32 {
        self.texture.width as f32
    }

    pub fn source_height(&self) -> f32 {
        self.texture.height as f32
    }

    /// Displayed width, after scaling.
    pub fn width(&self) -> f32 {
        self.source_width() * self.scale.x
    }

    /// Sets the displayed width by adjusting the horizontal scale.
    pub fn set_width(&mut self, width: f32) {
        self.scale.x = width / self.source_width();
    }

    pub fn height(&self) -> f32 {
        self.source_height() * self.scale.y
    }

    pub fn set_height(&mut self, height: f32) {
        self.scale.y = height / self.source_height();
    }

    /// Multiplies the current scale.
    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale *= factor;
    }

    /// Replaces the current scale.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.translate(self.position);
        canvas.scale(self.scale);
        canvas.rotate(self.rotation);
        canvas.image(self.texture.handle, SourceRect::of(&self.texture), -self.anchor);
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use canvas::{DrawOp, ImageHandle, RecordingCanvas};

    use super::*;

    fn sprite() -> ImageSprite {
        ImageSprite::new(
            TextureInfo {
                handle: ImageHandle(7),
                width: 64,
                height: 32,
            },
            Vec2::new(10.0, 20.0),
            Vec2::new(32.0, 16.0),
            0.0,
            Vec2::ONE,
        )
    }

    #[test]
    fn test_size_setters_adjust_scale() {
        let mut sprite = sprite();
        assert_eq!(sprite.width(), 64.0);

        sprite.set_width(128.0);
        sprite.set_height(16.0);
        assert_eq!(sprite.width(), 128.0);
        assert_eq!(sprite.height(), 16.0);
        // source dimensions are untouched
        assert_eq!(sprite.source_width(), 64.0);

        sprite.scale_by(Vec2::splat(2.0));
        assert_eq!(sprite.width(), 256.0);
    }

    #[test]
    fn test_render_anchors_the_image() {
        let sprite = sprite();
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        sprite.render(&mut canvas);

        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Push,
                DrawOp::Translate(Vec2::new(10.0, 20.0)),
                DrawOp::Scale(Vec2::ONE),
                DrawOp::Rotate(0.0),
                DrawOp::Image {
                    image: ImageHandle(7),
                    src: SourceRect::new(0, 0, 64, 32),
                    offset: Vec2::new(-32.0, -16.0),
                },
                DrawOp::Pop,
            ]
        );
    }
}
