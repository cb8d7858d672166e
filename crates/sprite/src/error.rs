//! Sprite error types.

use canvas::CanvasError;
use thiserror::Error;

/// Errors raised while loading manifests or instantiating sprites.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("failed to read sprite manifest")]
    Io(#[from] std::io::Error),

    #[error("invalid sprite manifest")]
    Manifest(#[from] toml::de::Error),

    #[error(transparent)]
    Texture(#[from] CanvasError),

    #[error("the sprite {0:?} does not exist (has its manifest been loaded?)")]
    UnknownSprite(String),

    #[error("the sprite {0:?} is animated, use make_animated_sprite instead")]
    IsAnimated(String),

    #[error("the sprite {0:?} is not animated, use make_image_sprite instead")]
    NotAnimated(String),

    #[error("the sprite {0:?} has no frames")]
    NoFrames(String),

    #[error("the sprite {sprite:?} has no animation tag named {tag:?}")]
    UnknownTag { sprite: String, tag: String },

    #[error("the animation tag {tag:?} of sprite {sprite:?} is out of frame range")]
    TagOutOfRange { sprite: String, tag: String },

    #[error(
        "invalid {axis} anchor {value:?} for sprite {sprite:?} \
         (expected a pixel offset or a named position)"
    )]
    InvalidAnchor {
        sprite: String,
        axis: &'static str,
        value: String,
    },
}
