//! Animated sprites: tagged frame windows driven by a frame timer.

use canvas::{Canvas, SourceRect, TextureInfo};
use glam::Vec2;
use serde::Deserialize;

use crate::error::SpriteError;

/// What happens when playback reaches the end of the current tag window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    /// Wrap around and keep going.
    #[default]
    Loop,
    /// Reverse direction at either end.
    PingPong,
    /// Stop on the last frame and pause.
    PlayOnce,
}

/// A named window of frames, inclusive on both ends.
#[derive(Debug, Clone)]
pub struct FrameTag {
    pub name: String,
    pub from: usize,
    pub to: usize,
}

/// A sheet-backed sprite that steps through tagged frame windows.
///
/// `update` counts the frame timer down and advances one frame each time
/// it expires; `playback_speed` scales the timer and its sign sets the
/// playback direction.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    name: String,
    texture: TextureInfo,
    frames: Vec<SourceRect>,
    tags: Vec<FrameTag>,
    tag_index: usize,
    frame_index: usize,
    frame_delay: f32,
    frame_timer: f32,
    pub playback_mode: PlaybackMode,
    pub playback_speed: f32,
    pub paused: bool,
    pub position: Vec2,
    /// Pixel offset within a frame that `position` maps to.
    pub anchor: Vec2,
    pub rotation: f32,
    scale: Vec2,
}

impl AnimatedSprite {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        texture: TextureInfo,
        frames: Vec<SourceRect>,
        tags: Vec<FrameTag>,
        start_tag: usize,
        frame_rate: f32,
        playback_mode: PlaybackMode,
        playback_speed: f32,
        paused: bool,
        position: Vec2,
        anchor: Vec2,
        rotation: f32,
        scale: Vec2,
    ) -> Self {
        let frame_delay = 1.0 / frame_rate;
        let mut sprite = Self {
            name,
            texture,
            frames,
            tags,
            tag_index: start_tag,
            frame_index: 0,
            frame_delay,
            frame_timer: frame_delay,
            playback_mode,
            playback_speed,
            paused,
            position,
            anchor,
            rotation,
            scale,
        };
        sprite.rewind();
        sprite
    }

    /// The manifest name this sprite was instantiated from.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn window(&self) -> (usize, usize) {
        let tag = &self.tags[self.tag_index];
        (tag.from, tag.to)
    }

    /// Frames in the current tag window.
    pub fn frame_count(&self) -> usize {
        let (from, to) = self.window();
        to - from + 1
    }

    /// Index of the current frame within the current tag window.
    pub fn current_frame(&self) -> usize {
        self.frame_index - self.window().0
    }

    pub fn current_tag(&self) -> &str {
        &self.tags[self.tag_index].name
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    pub fn frame_rate(&self) -> f32 {
        1.0 / self.frame_delay
    }

    pub fn set_frame_rate(&mut self, rate: f32) {
        self.frame_delay = 1.0 / rate;
    }

    pub fn source_width(&self) -> f32 {
        self.frames[0].w as f32
    }

    pub fn source_height(&self) -> f32 {
        self.frames[0].h as f32
    }

    pub fn width(&self) -> f32 {
        self.source_width() * self.scale.x
    }

    pub fn set_width(&mut self, width: f32) {
        self.scale.x = width / self.source_width();
    }

    pub fn height(&self) -> f32 {
        self.source_height() * self.scale.y
    }

    pub fn set_height(&mut self, height: f32) {
        self.scale.y = height / self.source_height();
    }

    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale *= factor;
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Moves the playhead to the start of the window (the end when
    /// playing backward).
    fn rewind(&mut self) {
        let (from, to) = self.window();
        self.frame_index = if self.playback_speed < 0.0 { to } else { from };
    }

    /// Steps the playhead by `n` frames, applying the playback mode at
    /// the window edges.
    pub fn advance_frame(&mut self, n: i64) {
        let (from, to) = self.window();
        let (from_i, to_i) = (from as i64, to as i64);
        let mut index = self.frame_index as i64 + n;

        match self.playback_mode {
            PlaybackMode::Loop => {
                let count = to_i - from_i + 1;
                index = (index - from_i).rem_euclid(count) + from_i;
            }
            PlaybackMode::PingPong => {
                if index < from_i {
                    index = from_i;
                    self.playback_speed = -self.playback_speed;
                } else if index > to_i {
                    index = to_i;
                    self.playback_speed = -self.playback_speed;
                }
            }
            PlaybackMode::PlayOnce => {
                if index < from_i {
                    index = from_i;
                    self.paused = true;
                } else if index > to_i {
                    index = to_i;
                    self.paused = true;
                }
            }
        }
        self.frame_index = index as usize;
    }

    /// Restarts playback from the beginning of the current tag.
    pub fn restart(&mut self, start_paused: bool) {
        self.paused = start_paused;
        self.rewind();
    }

    /// Switches to another tag window and rewinds into it.
    pub fn set_tag(&mut self, name: &str) -> Result<(), SpriteError> {
        let index = self
            .tags
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| SpriteError::UnknownTag {
                sprite: self.name.clone(),
                tag: name.to_string(),
            })?;
        self.tag_index = index;
        self.rewind();
        Ok(())
    }

    /// Counts the frame timer down and advances when it expires.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.frame_timer -= dt;
        if self.frame_timer <= 0.0 {
            self.advance_frame(if self.playback_speed < 0.0 { -1 } else { 1 });
            self.frame_timer = self.frame_delay / self.playback_speed.abs();
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.translate(self.position);
        canvas.scale(self.scale);
        canvas.rotate(self.rotation);
        canvas.image(self.texture.handle, self.frames[self.frame_index], -self.anchor);
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use canvas::ImageHandle;

    use super::*;

    fn sprite(mode: PlaybackMode) -> AnimatedSprite {
        let frames = (0..6)
            .map(|i| SourceRect::new(i * 16, 0, 16, 16))
            .collect();
        AnimatedSprite::new(
            "test".into(),
            TextureInfo {
                handle: ImageHandle(0),
                width: 96,
                height: 16,
            },
            frames,
            vec![
                FrameTag {
                    name: "idle".into(),
                    from: 0,
                    to: 2,
                },
                FrameTag {
                    name: "run".into(),
                    from: 3,
                    to: 5,
                },
            ],
            0,
            10.0,
            mode,
            1.0,
            false,
            Vec2::ZERO,
            Vec2::ZERO,
            0.0,
            Vec2::ONE,
        )
    }

    #[test]
    fn test_loop_covers_the_whole_window() {
        let mut sprite = sprite(PlaybackMode::Loop);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(sprite.current_frame());
            sprite.advance_frame(1);
        }
        // every frame of the 3-frame window, then around again
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_loop_wraps_backward() {
        let mut sprite = sprite(PlaybackMode::Loop);
        sprite.advance_frame(-1);
        assert_eq!(sprite.current_frame(), 2);
    }

    #[test]
    fn test_ping_pong_reverses_at_the_ends() {
        let mut sprite = sprite(PlaybackMode::PingPong);
        sprite.advance_frame(1);
        sprite.advance_frame(1);
        assert_eq!(sprite.current_frame(), 2);

        // walking past the end clamps and flips direction
        sprite.advance_frame(1);
        assert_eq!(sprite.current_frame(), 2);
        assert_eq!(sprite.playback_speed, -1.0);
    }

    #[test]
    fn test_play_once_pauses_on_the_last_frame() {
        let mut sprite = sprite(PlaybackMode::PlayOnce);
        for _ in 0..5 {
            sprite.advance_frame(1);
        }
        assert_eq!(sprite.current_frame(), 2);
        assert!(sprite.paused);
    }

    #[test]
    fn test_update_advances_on_the_frame_timer() {
        let mut sprite = sprite(PlaybackMode::Loop);

        // 10 fps: nothing at 50ms, one frame at 100ms
        sprite.update(0.05);
        assert_eq!(sprite.current_frame(), 0);
        sprite.update(0.05);
        assert_eq!(sprite.current_frame(), 1);

        // paused sprites don't advance
        sprite.paused = true;
        sprite.update(1.0);
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_negative_speed_plays_backward() {
        let mut sprite = sprite(PlaybackMode::Loop);
        sprite.playback_speed = -1.0;
        sprite.restart(false);
        assert_eq!(sprite.current_frame(), 2);

        sprite.update(0.1);
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn test_set_tag_switches_window() {
        let mut sprite = sprite(PlaybackMode::Loop);
        sprite.set_tag("run").unwrap();
        assert_eq!(sprite.current_tag(), "run");
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.frame_count(), 3);

        assert!(matches!(
            sprite.set_tag("swim"),
            Err(SpriteError::UnknownTag { .. })
        ));
    }

    #[test]
    fn test_faster_playback_shortens_the_timer() {
        let mut sprite = sprite(PlaybackMode::Loop);
        sprite.playback_speed = 2.0;

        sprite.update(0.1);
        assert_eq!(sprite.current_frame(), 1);
        // the reloaded timer is delay / |speed| = 50ms
        sprite.update(0.05);
        assert_eq!(sprite.current_frame(), 2);
    }
}
