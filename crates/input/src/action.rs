//! Actions and their activation state machines.

use fixedbitset::FixedBitSet;

use crate::keys::Key;

/// When an action reports itself active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationMode {
    /// Active on every frame a bound key is held.
    #[default]
    Continuous,
    /// Active for a single frame when a bound key goes down.
    Press,
    /// Active for a single frame when a bound key comes back up.
    Release,
}

/// Configuration for a named action.
///
/// `keys` lists every key or mouse button that can drive the action. With
/// `chord` set, all of them must be held at once; otherwise any one is
/// enough. The callback, if any, runs on every frame the action is active.
pub struct ActionConfig {
    pub name: String,
    pub keys: Vec<Key>,
    pub mode: ActivationMode,
    pub chord: bool,
    pub callback: Option<Box<dyn FnMut()>>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            keys: Vec::new(),
            mode: ActivationMode::default(),
            chord: false,
            callback: None,
        }
    }
}

/// A registered action plus its activation state.
pub(crate) struct Action {
    pub(crate) name: String,
    keys: Vec<Key>,
    mode: ActivationMode,
    chord: bool,
    pub(crate) callback: Option<Box<dyn FnMut()>>,
    pub(crate) active: bool,
    was_active: bool,
}

impl Action {
    pub(crate) fn new(config: ActionConfig) -> Self {
        Self {
            name: config.name,
            keys: config.keys,
            mode: config.mode,
            chord: config.chord,
            callback: config.callback,
            active: false,
            // a Release action must see a press before its first
            // activation, so it starts as if already fired
            was_active: config.mode == ActivationMode::Release,
        }
    }

    fn bound_key_pressed(&self, states: &FixedBitSet) -> bool {
        if self.chord {
            self.keys.iter().all(|k| states.contains(k.index()))
        } else {
            self.keys.iter().any(|k| states.contains(k.index()))
        }
    }

    /// Re-evaluates `active` from the current key states.
    pub(crate) fn refresh(&mut self, states: &FixedBitSet) {
        let pressed = self.bound_key_pressed(states);
        match self.mode {
            ActivationMode::Continuous => self.active = pressed,
            ActivationMode::Press => {
                if pressed {
                    self.active = !self.was_active;
                    self.was_active = true;
                } else {
                    self.active = false;
                    self.was_active = false;
                }
            }
            ActivationMode::Release => {
                if !pressed {
                    self.active = !self.was_active;
                    self.was_active = true;
                } else {
                    self.active = false;
                    self.was_active = false;
                }
            }
        }
    }
}
