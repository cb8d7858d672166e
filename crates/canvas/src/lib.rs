//! Drawing-surface contract shared by every renderable part of the toolkit.
//!
//! This crate contains:
//! - The [`Canvas`] trait: a 2D surface with a transform stack and a small
//!   set of primitive draws.
//! - The [`TextureStore`] trait: the seam through which textures are turned
//!   into [`ImageHandle`]s.
//! - [`RecordingCanvas`]: a backend-free implementation of both, used by
//!   tests and the headless demos.

mod record;

use std::path::PathBuf;

use glam::Vec2;
use thiserror::Error;

pub use record::{DrawOp, RecordingCanvas};

/// Errors raised by texture acquisition.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("no texture registered for {0:?}")]
    UnknownTexture(PathBuf),
}

/// Opaque id for a texture owned by a rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// A loaded texture: its handle plus pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

/// A pixel-space rectangle into a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SourceRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The full extent of a texture.
    pub const fn of(texture: &TextureInfo) -> Self {
        Self::new(0, 0, texture.width, texture.height)
    }
}

/// A 2D drawing surface.
///
/// Transform calls (`translate`, `rotate`, `scale`) compose onto the current
/// transform; `push`/`pop` save and restore it. All coordinates are in the
/// current transformed space.
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Saves the current transform.
    fn push(&mut self);
    /// Restores the most recently saved transform.
    fn pop(&mut self);

    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, factor: Vec2);

    fn point(&mut self, position: Vec2);
    fn line(&mut self, start: Vec2, end: Vec2);
    fn circle(&mut self, center: Vec2, radius: f32);
    fn rect(&mut self, top_left: Vec2, size: Vec2);
    fn polygon(&mut self, vertices: &[Vec2]);

    /// Blits `src` out of a texture with its top-left corner at `offset`.
    fn image(&mut self, image: ImageHandle, src: SourceRect, offset: Vec2);
}

/// Turns texture paths into handles.
///
/// A real backend decodes the image file; test and headless implementations
/// serve pre-registered dimensions instead.
pub trait TextureStore {
    fn acquire(&mut self, path: &std::path::Path) -> Result<TextureInfo, CanvasError>;
}
