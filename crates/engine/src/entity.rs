//! The entity contract.

use canvas::Canvas;

/// A game object owned and driven by an [`Engine`](crate::Engine).
///
/// Every method has a default, so an entity only implements what it uses.
pub trait Entity {
    /// Advances the entity by `dt` seconds. Called once per engine tick
    /// with the scaled delta time (see
    /// [`uses_raw_delta_time`](Entity::uses_raw_delta_time)).
    fn update(&mut self, _dt: f32) {}

    /// Draws the entity. The canvas is already translated into world
    /// space unless [`uses_screen_space`](Entity::uses_screen_space)
    /// returns true.
    fn render(&self, _canvas: &mut dyn Canvas) {}

    /// User-defined tags for filtering; what an entity is ("wall") and
    /// what it can do ("blocks-player").
    fn tags(&self) -> &[&str] {
        &[]
    }

    /// Entities returning true are dropped at the end of the current
    /// tick. Use this for permanent removal; a temporarily inert entity
    /// should just do nothing in `update`.
    fn is_deleted(&self) -> bool {
        false
    }

    /// Opts out of the engine's delta-time multiplier, so the entity runs
    /// at wall-clock speed even when the simulation is slowed or sped up
    /// (HUD animations, pause menus).
    fn uses_raw_delta_time(&self) -> bool {
        false
    }

    /// Renders in screen coordinates, ignoring the camera (HUD overlays).
    fn uses_screen_space(&self) -> bool {
        false
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }
}
