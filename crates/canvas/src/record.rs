//! A canvas that records draw calls instead of rasterizing them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec2;

use crate::{Canvas, CanvasError, ImageHandle, SourceRect, TextureInfo, TextureStore};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Push,
    Pop,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    Point(Vec2),
    Line(Vec2, Vec2),
    Circle(Vec2, f32),
    Rect(Vec2, Vec2),
    Polygon(Vec<Vec2>),
    Image {
        image: ImageHandle,
        src: SourceRect,
        offset: Vec2,
    },
}

/// Records every draw call as a [`DrawOp`] for later assertions.
///
/// Also implements [`TextureStore`] over a registry of path -> dimensions
/// entries, handing out one stable handle per path.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
    textures: HashMap<PathBuf, TextureInfo>,
    next_handle: u32,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Registers the dimensions served for `path`, as if a backend had
    /// decoded the image.
    pub fn register_texture(&mut self, path: impl Into<PathBuf>, width: u32, height: u32) {
        let handle = ImageHandle(self.next_handle);
        self.next_handle += 1;
        self.textures.insert(
            path.into(),
            TextureInfo {
                handle,
                width,
                height,
            },
        );
    }

    /// All draw calls recorded so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn push(&mut self) {
        self.ops.push(DrawOp::Push);
    }

    fn pop(&mut self) {
        self.ops.push(DrawOp::Pop);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.ops.push(DrawOp::Rotate(angle));
    }

    fn scale(&mut self, factor: Vec2) {
        self.ops.push(DrawOp::Scale(factor));
    }

    fn point(&mut self, position: Vec2) {
        self.ops.push(DrawOp::Point(position));
    }

    fn line(&mut self, start: Vec2, end: Vec2) {
        self.ops.push(DrawOp::Line(start, end));
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(DrawOp::Circle(center, radius));
    }

    fn rect(&mut self, top_left: Vec2, size: Vec2) {
        self.ops.push(DrawOp::Rect(top_left, size));
    }

    fn polygon(&mut self, vertices: &[Vec2]) {
        self.ops.push(DrawOp::Polygon(vertices.to_vec()));
    }

    fn image(&mut self, image: ImageHandle, src: SourceRect, offset: Vec2) {
        self.ops.push(DrawOp::Image { image, src, offset });
    }
}

impl TextureStore for RecordingCanvas {
    fn acquire(&mut self, path: &Path) -> Result<TextureInfo, CanvasError> {
        self.textures
            .get(path)
            .copied()
            .ok_or_else(|| CanvasError::UnknownTexture(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_order() {
        let mut canvas = RecordingCanvas::new(640.0, 480.0);
        canvas.push();
        canvas.translate(Vec2::new(10.0, 20.0));
        canvas.circle(Vec2::ZERO, 5.0);
        canvas.pop();

        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Push,
                DrawOp::Translate(Vec2::new(10.0, 20.0)),
                DrawOp::Circle(Vec2::ZERO, 5.0),
                DrawOp::Pop,
            ]
        );
    }

    #[test]
    fn acquire_returns_stable_handles() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        canvas.register_texture("sheet.png", 128, 64);

        let first = canvas.acquire(Path::new("sheet.png")).unwrap();
        let second = canvas.acquire(Path::new("sheet.png")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.width, 128);
        assert_eq!(first.height, 64);
    }

    #[test]
    fn acquire_unregistered_is_an_error() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        assert!(canvas.acquire(Path::new("missing.png")).is_err());
    }
}
