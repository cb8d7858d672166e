//! Sprite and animation playback.
//!
//! A [`SpriteLoader`] reads a TOML manifest describing static images and
//! animated sheets, acquires their textures through a
//! [`TextureStore`](canvas::TextureStore), and instantiates
//! [`ImageSprite`]s and [`AnimatedSprite`]s from the stored prototypes.

mod animated;
mod error;
mod image;
mod loader;
pub mod manifest;

pub use animated::{AnimatedSprite, FrameTag, PlaybackMode};
pub use error::SpriteError;
pub use image::ImageSprite;
pub use loader::SpriteLoader;
