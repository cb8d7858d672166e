//! The engine proper: tick accumulation, entity sweeps, camera.

use canvas::Canvas;
use glam::Vec2;
use thiserror::Error;
use tracing::warn;

use crate::entity::Entity;

/// Errors raised by engine configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("tick rate must be positive (got {0})")]
    InvalidTickRate(f32),
}

/// Initial engine settings. `Default` gives a 60 tps engine rendering to
/// an 800x600 surface with a centered, rigid camera.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Simulation ticks per second.
    pub tick_rate: f32,
    /// Render surface size, used for the default camera anchor and the
    /// camera boundary.
    pub screen_width: f32,
    pub screen_height: f32,
    /// World size for camera clamping; defaults to the screen size.
    pub world_width: Option<f32>,
    pub world_height: Option<f32>,
    /// Screen-space point the camera position maps to; defaults to the
    /// screen center.
    pub camera_anchor: Option<Vec2>,
    /// Initial camera position; defaults to the anchor.
    pub camera_pos: Option<Vec2>,
    /// Lerp factor applied to the camera each tick: 1 snaps to the
    /// target, smaller values trail behind it.
    pub camera_tightness: f32,
    /// Clamp the camera so the view never leaves the world rectangle.
    pub use_camera_boundary: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            screen_width: 800.0,
            screen_height: 600.0,
            world_width: None,
            world_height: None,
            camera_anchor: None,
            camera_pos: None,
            camera_tightness: 1.0,
            use_camera_boundary: false,
        }
    }
}

/// Owns all entities and drives their update/render cycle.
///
/// `update` accumulates frame deltas and runs at most one fixed-rate tick
/// per call; `render` draws every live entity through the camera
/// transform. Entity mutation happens only inside `update`, so collision
/// queries made from entity code always see fully recomputed shapes.
pub struct Engine {
    entities: Vec<Box<dyn Entity>>,

    tick_rate: f32,
    seconds_per_tick: f32,
    dt_counter: f32,
    last_dt: f32,
    /// Speed-of-time scale applied to entity deltas. 1 is real time;
    /// values <= 0 are not meaningful.
    pub delta_time_multiplier: f32,

    camera_pos: Vec2,
    /// Where the camera is headed; it closes the gap by
    /// `camera_tightness` each tick.
    pub camera_target: Vec2,
    camera_offset: Vec2,
    pub camera_tightness: f32,
    pub use_camera_boundary: bool,

    screen_width: f32,
    screen_height: f32,
    world_width: f32,
    world_height: f32,

    render_offset: Vec2,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let anchor = config
            .camera_anchor
            .unwrap_or(Vec2::new(config.screen_width, config.screen_height) / 2.0);
        let camera_pos = config.camera_pos.unwrap_or(anchor);

        let mut engine = Self {
            entities: Vec::new(),
            tick_rate: 0.0,
            seconds_per_tick: 0.0,
            dt_counter: 0.0,
            last_dt: 0.0,
            delta_time_multiplier: 1.0,
            camera_pos,
            camera_target: camera_pos,
            camera_offset: -anchor,
            camera_tightness: config.camera_tightness,
            use_camera_boundary: config.use_camera_boundary,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            world_width: config.world_width.unwrap_or(config.screen_width),
            world_height: config.world_height.unwrap_or(config.screen_height),
            render_offset: Vec2::ZERO,
        };
        engine.set_tick_rate(config.tick_rate)?;
        Ok(engine)
    }

    /// Changes the simulation rate. Rates at or below zero are rejected;
    /// low rates work but make for a choppy simulation, so they warn.
    pub fn set_tick_rate(&mut self, rate: f32) -> Result<(), EngineError> {
        if rate <= 0.0 {
            return Err(EngineError::InvalidTickRate(rate));
        }
        if rate < 60.0 {
            warn!(rate, "tick rate is low and may cause a choppy simulation");
        }
        self.tick_rate = rate;
        self.seconds_per_tick = 1.0 / rate;
        Ok(())
    }

    #[inline]
    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    /// Duration of the last tick, unscaled.
    #[inline]
    pub fn delta_time_raw(&self) -> f32 {
        self.last_dt
    }

    /// Duration of the last tick times the current multiplier.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.last_dt * self.delta_time_multiplier
    }

    pub fn add_entity(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Feeds one frame's delta into the accumulator; once a full tick
    /// interval has built up, updates every entity with the accumulated
    /// time, sweeps out deleted entities, and advances the camera.
    pub fn update(&mut self, frame_dt: f32) {
        self.dt_counter += frame_dt;
        if self.dt_counter < self.seconds_per_tick {
            return;
        }
        self.last_dt = self.dt_counter;
        self.dt_counter = 0.0;

        // snapshot the scaled delta so a mid-tick multiplier change
        // doesn't skew the remaining entities
        let dt = self.last_dt * self.delta_time_multiplier;
        for entity in &mut self.entities {
            if !entity.is_deleted() {
                if entity.uses_raw_delta_time() {
                    entity.update(self.last_dt);
                } else {
                    entity.update(dt);
                }
            }
        }
        self.entities.retain(|e| !e.is_deleted());

        if self.camera_pos != self.camera_target {
            self.camera_pos = self.camera_pos.lerp(self.camera_target, self.camera_tightness);
        }
    }

    /// Renders every entity through the camera transform.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        self.render_offset = self.camera_pos + self.camera_offset;
        if self.use_camera_boundary {
            let max = Vec2::new(
                self.world_width - self.screen_width,
                self.world_height - self.screen_height,
            );
            self.render_offset = self.render_offset.clamp(Vec2::ZERO, max);
        }

        canvas.push();
        canvas.translate(-self.render_offset);
        for entity in &self.entities {
            if entity.uses_screen_space() {
                canvas.translate(self.render_offset);
                entity.render(canvas);
                canvas.translate(-self.render_offset);
            } else {
                entity.render(canvas);
            }
        }
        canvas.pop();
    }

    /// Removes every entity the predicate rejects.
    pub fn retain(&mut self, predicate: impl Fn(&dyn Entity) -> bool) {
        self.entities.retain(|e| predicate(e.as_ref()));
    }

    pub fn remove_tagged(&mut self, tag: &str) {
        self.retain(|e| !e.has_tag(tag));
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Entities the predicate accepts.
    pub fn matching(&self, predicate: impl Fn(&dyn Entity) -> bool) -> Vec<&dyn Entity> {
        self.entities
            .iter()
            .map(|e| e.as_ref())
            .filter(|e| predicate(*e))
            .collect()
    }

    pub fn tagged(&self, tag: &str) -> Vec<&dyn Entity> {
        self.matching(|e| e.has_tag(tag))
    }

    #[inline]
    pub fn camera_pos(&self) -> Vec2 {
        self.camera_pos
    }

    /// Teleports the camera, target included.
    pub fn set_camera_pos(&mut self, pos: Vec2) {
        self.camera_pos = pos;
        self.camera_target = pos;
    }

    /// Screen-space point the camera position maps to.
    pub fn camera_anchor(&self) -> Vec2 {
        -self.camera_offset
    }

    pub fn set_camera_anchor(&mut self, anchor: Vec2) {
        self.camera_offset = -anchor;
    }

    /// Converts a screen position to world space using the offsets of the
    /// most recent `render` call.
    pub fn screen_to_world(&self, pos: Vec2) -> Vec2 {
        pos + self.render_offset
    }

    /// Converts a world position to screen space using the offsets of the
    /// most recent `render` call.
    pub fn world_to_screen(&self, pos: Vec2) -> Vec2 {
        pos - self.render_offset
    }
}
