//! The TOML sprite-manifest format.
//!
//! A manifest names each sprite and describes either a static image or an
//! animated sheet: frame source-rects, tag windows, and playback defaults.

use std::collections::HashMap;

use serde::Deserialize;

use crate::animated::PlaybackMode;
use crate::error::SpriteError;

#[derive(Debug, Deserialize)]
pub struct SpriteManifest {
    pub sprites: HashMap<String, SpriteDef>,
}

impl SpriteManifest {
    pub fn parse(source: &str) -> Result<Self, SpriteError> {
        Ok(toml::from_str(source)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpriteDef {
    Image(ImageDef),
    Animated(AnimatedDef),
}

/// A static, single-image sprite.
#[derive(Debug, Deserialize)]
pub struct ImageDef {
    pub path: String,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub anchor: AnchorDef,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
    #[serde(default)]
    pub size: SizeDef,
}

/// An animated sprite cut out of a sheet texture.
#[derive(Debug, Deserialize)]
pub struct AnimatedDef {
    pub sheet: String,
    /// Source rects into the sheet, one `[x, y, w, h]` per frame.
    pub frames: Vec<[u32; 4]>,
    #[serde(default)]
    pub tags: Vec<TagDef>,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    #[serde(default)]
    pub playback_mode: PlaybackMode,
    #[serde(default = "default_playback_speed")]
    pub playback_speed: f32,
    #[serde(default)]
    pub start_paused: bool,
    /// Tag to start in; defaults to the first tag.
    #[serde(default)]
    pub start_tag: Option<String>,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub anchor: AnchorDef,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
    #[serde(default)]
    pub size: SizeDef,
}

/// A named window of frames, inclusive on both ends.
#[derive(Debug, Deserialize)]
pub struct TagDef {
    pub name: String,
    pub from: usize,
    pub to: usize,
}

/// Optional absolute size; when present it overrides `scale` on that axis.
#[derive(Debug, Default, Deserialize)]
pub struct SizeDef {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Display anchor, per axis either a named position or a pixel offset.
#[derive(Debug, Deserialize)]
pub struct AnchorDef {
    #[serde(default)]
    pub x: AnchorAxis,
    #[serde(default)]
    pub y: AnchorAxis,
}

impl Default for AnchorDef {
    fn default() -> Self {
        Self {
            x: AnchorAxis::default(),
            y: AnchorAxis::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnchorAxis {
    Pixels(f32),
    Named(String),
}

impl Default for AnchorAxis {
    fn default() -> Self {
        AnchorAxis::Named("center".into())
    }
}

impl AnchorAxis {
    /// Resolves against a horizontal extent: `left`, `center`, `right`.
    pub fn resolve_x(&self, sprite: &str, extent: f32) -> Result<f32, SpriteError> {
        match self {
            AnchorAxis::Pixels(px) => Ok(*px),
            AnchorAxis::Named(name) => match name.as_str() {
                "left" => Ok(0.0),
                "center" => Ok(extent / 2.0),
                "right" => Ok(extent),
                other => Err(SpriteError::InvalidAnchor {
                    sprite: sprite.to_string(),
                    axis: "horizontal",
                    value: other.to_string(),
                }),
            },
        }
    }

    /// Resolves against a vertical extent: `top`, `center`, `bottom`.
    pub fn resolve_y(&self, sprite: &str, extent: f32) -> Result<f32, SpriteError> {
        match self {
            AnchorAxis::Pixels(px) => Ok(*px),
            AnchorAxis::Named(name) => match name.as_str() {
                "top" => Ok(0.0),
                "center" => Ok(extent / 2.0),
                "bottom" => Ok(extent),
                other => Err(SpriteError::InvalidAnchor {
                    sprite: sprite.to_string(),
                    axis: "vertical",
                    value: other.to_string(),
                }),
            },
        }
    }
}

fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

fn default_frame_rate() -> f32 {
    20.0
}

fn default_playback_speed() -> f32 {
    1.0
}
