//! The sprite loader: manifests in, sprite prototypes out.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use canvas::{SourceRect, TextureStore};
use glam::Vec2;
use tracing::{debug, info};

use crate::animated::{AnimatedSprite, FrameTag};
use crate::error::SpriteError;
use crate::image::ImageSprite;
use crate::manifest::{AnimatedDef, ImageDef, SpriteDef, SpriteManifest};

enum Prototype {
    Image(ImageSprite),
    Animated(AnimatedSprite),
}

/// Parses sprite manifests and hands out ready-to-use sprite instances.
///
/// Textures are acquired through the caller's [`TextureStore`] at load
/// time; `make_image_sprite` / `make_animated_sprite` then clone fresh
/// instances off the stored prototypes.
#[derive(Default)]
pub struct SpriteLoader {
    sprites: HashMap<String, Prototype>,
}

impl SpriteLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every sprite in a manifest file. Texture paths are resolved
    /// relative to the manifest's directory. Returns the number of
    /// sprites loaded.
    pub fn load_manifest(
        &mut self,
        path: impl AsRef<Path>,
        textures: &mut dyn TextureStore,
    ) -> Result<usize, SpriteError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        self.load(&source, path.parent(), textures)
    }

    /// Loads every sprite in an in-memory manifest. Texture paths are
    /// taken as-is.
    pub fn load_manifest_str(
        &mut self,
        source: &str,
        textures: &mut dyn TextureStore,
    ) -> Result<usize, SpriteError> {
        self.load(source, None, textures)
    }

    fn load(
        &mut self,
        source: &str,
        base: Option<&Path>,
        textures: &mut dyn TextureStore,
    ) -> Result<usize, SpriteError> {
        let started = Instant::now();
        let manifest = SpriteManifest::parse(source)?;

        let count = manifest.sprites.len();
        for (name, def) in manifest.sprites {
            let prototype = match def {
                SpriteDef::Image(def) => {
                    Prototype::Image(build_image(&name, def, base, textures)?)
                }
                SpriteDef::Animated(def) => {
                    Prototype::Animated(build_animated(&name, def, base, textures)?)
                }
            };
            debug!(sprite = %name, "loaded sprite");
            self.sprites.insert(name, prototype);
        }

        info!(count, elapsed = ?started.elapsed(), "loaded sprite manifest");
        Ok(count)
    }

    /// Instantiates a static sprite loaded earlier.
    pub fn make_image_sprite(&self, name: &str) -> Result<ImageSprite, SpriteError> {
        match self.sprites.get(name) {
            Some(Prototype::Image(sprite)) => Ok(sprite.clone()),
            Some(Prototype::Animated(_)) => Err(SpriteError::IsAnimated(name.to_string())),
            None => Err(SpriteError::UnknownSprite(name.to_string())),
        }
    }

    /// Instantiates an animated sprite loaded earlier.
    pub fn make_animated_sprite(&self, name: &str) -> Result<AnimatedSprite, SpriteError> {
        match self.sprites.get(name) {
            Some(Prototype::Animated(sprite)) => Ok(sprite.clone()),
            Some(Prototype::Image(_)) => Err(SpriteError::NotAnimated(name.to_string())),
            None => Err(SpriteError::UnknownSprite(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

fn resolve_path(base: Option<&Path>, path: &str) -> PathBuf {
    match base {
        Some(base) => base.join(path),
        None => PathBuf::from(path),
    }
}

/// Scale for one axis: an absolute size wins over the scale factor.
fn axis_scale(size: Option<f32>, scale: f32, source: f32) -> f32 {
    match size {
        Some(absolute) => absolute / source,
        None => scale,
    }
}

fn build_image(
    name: &str,
    def: ImageDef,
    base: Option<&Path>,
    textures: &mut dyn TextureStore,
) -> Result<ImageSprite, SpriteError> {
    let texture = textures.acquire(&resolve_path(base, &def.path))?;
    let source = Vec2::new(texture.width as f32, texture.height as f32);

    let anchor = Vec2::new(
        def.anchor.x.resolve_x(name, source.x)?,
        def.anchor.y.resolve_y(name, source.y)?,
    );
    let scale = Vec2::new(
        axis_scale(def.size.width, def.scale[0], source.x),
        axis_scale(def.size.height, def.scale[1], source.y),
    );

    Ok(ImageSprite::new(
        texture,
        Vec2::from(def.position),
        anchor,
        def.rotation,
        scale,
    ))
}

fn build_animated(
    name: &str,
    def: AnimatedDef,
    base: Option<&Path>,
    textures: &mut dyn TextureStore,
) -> Result<AnimatedSprite, SpriteError> {
    if def.frames.is_empty() {
        return Err(SpriteError::NoFrames(name.to_string()));
    }

    let texture = textures.acquire(&resolve_path(base, &def.sheet))?;
    let frames: Vec<SourceRect> = def
        .frames
        .iter()
        .map(|&[x, y, w, h]| SourceRect::new(x, y, w, h))
        .collect();
    let source = Vec2::new(frames[0].w as f32, frames[0].h as f32);

    let anchor = Vec2::new(
        def.anchor.x.resolve_x(name, source.x)?,
        def.anchor.y.resolve_y(name, source.y)?,
    );
    let scale = Vec2::new(
        axis_scale(def.size.width, def.scale[0], source.x),
        axis_scale(def.size.height, def.scale[1], source.y),
    );

    let tags: Vec<FrameTag> = if def.tags.is_empty() {
        // untagged sheets get one window over every frame
        vec![FrameTag {
            name: "main".to_string(),
            from: 0,
            to: frames.len() - 1,
        }]
    } else {
        def.tags
            .into_iter()
            .map(|t| FrameTag {
                name: t.name,
                from: t.from,
                to: t.to,
            })
            .collect()
    };
    for tag in &tags {
        if tag.from > tag.to || tag.to >= frames.len() {
            return Err(SpriteError::TagOutOfRange {
                sprite: name.to_string(),
                tag: tag.name.clone(),
            });
        }
    }

    let start_tag = match &def.start_tag {
        Some(wanted) => tags
            .iter()
            .position(|t| &t.name == wanted)
            .ok_or_else(|| SpriteError::UnknownTag {
                sprite: name.to_string(),
                tag: wanted.clone(),
            })?,
        None => 0,
    };

    Ok(AnimatedSprite::new(
        name.to_string(),
        texture,
        frames,
        tags,
        start_tag,
        def.frame_rate,
        def.playback_mode,
        def.playback_speed,
        def.start_paused,
        Vec2::from(def.position),
        anchor,
        def.rotation,
        scale,
    ))
}
