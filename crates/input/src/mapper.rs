//! The input mapper: raw key state plus named actions.

use std::collections::HashMap;

use fixedbitset::FixedBitSet;
use tracing::warn;

use crate::action::{Action, ActionConfig};
use crate::error::InputError;
use crate::keys::Key;

/// Tracks pressed keys and re-evaluates named actions once per frame.
///
/// Feed key transitions with [`press`](InputMapper::press) and
/// [`release`](InputMapper::release) as the windowing layer reports them,
/// call [`update`](InputMapper::update) at the top of the frame, then poll
/// [`is_active`](InputMapper::is_active) (or let callbacks fire).
///
/// Actions are stored in insertion order; callbacks run in the order the
/// actions were added.
pub struct InputMapper {
    key_states: FixedBitSet,
    actions: Vec<Action>,
    index: HashMap<String, usize>,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMapper {
    pub fn new() -> Self {
        Self {
            key_states: FixedBitSet::with_capacity(Key::COUNT),
            actions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a named action.
    ///
    /// The name and key list must be non-empty. Re-using a name replaces
    /// the old action (with a warning, since that is rarely intended).
    pub fn add_action(&mut self, config: ActionConfig) -> Result<(), InputError> {
        if config.name.is_empty() {
            return Err(InputError::MissingName);
        }
        if config.keys.is_empty() {
            return Err(InputError::NoKeysBound(config.name));
        }

        if let Some(&slot) = self.index.get(&config.name) {
            warn!(action = %config.name, "input action already exists, overwriting");
            self.actions[slot] = Action::new(config);
        } else {
            self.index
                .insert(config.name.clone(), self.actions.len());
            self.actions.push(Action::new(config));
        }
        Ok(())
    }

    /// Re-evaluates every action against the current key states, then runs
    /// the callbacks of the active ones. Call once per frame.
    pub fn update(&mut self) {
        for action in &mut self.actions {
            action.refresh(&self.key_states);
            if action.active {
                if let Some(callback) = &mut action.callback {
                    callback();
                }
            }
        }
    }

    /// Whether the named action is currently active.
    pub fn is_active(&self, name: &str) -> Result<bool, InputError> {
        self.index
            .get(name)
            .map(|&slot| self.actions[slot].active)
            .ok_or_else(|| InputError::UnknownAction(name.to_string()))
    }

    /// Raw pressed state of a key or mouse button.
    #[inline]
    pub fn key_state(&self, key: Key) -> bool {
        self.key_states.contains(key.index())
    }

    pub fn press(&mut self, key: Key) {
        self.key_states.insert(key.index());
    }

    pub fn release(&mut self, key: Key) {
        self.key_states.set(key.index(), false);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Names of all registered actions, in insertion order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::action::ActivationMode;

    #[test]
    fn test_continuous_action_follows_key_state() {
        let mut mapper = InputMapper::new();
        mapper
            .add_action(ActionConfig {
                name: "fire".into(),
                keys: vec![Key::LeftMouse],
                ..Default::default()
            })
            .unwrap();

        mapper.update();
        assert!(!mapper.is_active("fire").unwrap());

        mapper.press(Key::LeftMouse);
        mapper.update();
        assert!(mapper.is_active("fire").unwrap());

        mapper.release(Key::LeftMouse);
        mapper.update();
        assert!(!mapper.is_active("fire").unwrap());
    }

    #[test]
    fn test_callback_runs_on_active_frames() {
        let count = Rc::new(Cell::new(0));
        let hook = Rc::clone(&count);

        let mut mapper = InputMapper::new();
        mapper
            .add_action(ActionConfig {
                name: "jump".into(),
                keys: vec![Key::Space],
                mode: ActivationMode::Press,
                callback: Some(Box::new(move || hook.set(hook.get() + 1))),
                ..Default::default()
            })
            .unwrap();

        mapper.press(Key::Space);
        mapper.update();
        mapper.update();
        mapper.release(Key::Space);
        mapper.update();
        mapper.press(Key::Space);
        mapper.update();

        // one per press edge, not one per held frame
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_add_action_validation() {
        let mut mapper = InputMapper::new();

        assert!(matches!(
            mapper.add_action(ActionConfig::default()),
            Err(InputError::MissingName)
        ));
        assert!(matches!(
            mapper.add_action(ActionConfig {
                name: "empty".into(),
                ..Default::default()
            }),
            Err(InputError::NoKeysBound(_))
        ));
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let mapper = InputMapper::new();
        assert!(matches!(
            mapper.is_active("nope"),
            Err(InputError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_overwriting_replaces_bindings() {
        let mut mapper = InputMapper::new();
        mapper
            .add_action(ActionConfig {
                name: "fire".into(),
                keys: vec![Key::LeftMouse],
                ..Default::default()
            })
            .unwrap();
        mapper
            .add_action(ActionConfig {
                name: "fire".into(),
                keys: vec![Key::Enter],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(mapper.len(), 1);
        mapper.press(Key::LeftMouse);
        mapper.update();
        assert!(!mapper.is_active("fire").unwrap());

        mapper.press(Key::Enter);
        mapper.update();
        assert!(mapper.is_active("fire").unwrap());
    }

    #[test]
    fn test_key_state_reads_raw_presses() {
        let mut mapper = InputMapper::new();
        assert!(!mapper.key_state(Key::W));
        mapper.press(Key::W);
        assert!(mapper.key_state(Key::W));
        mapper.release(Key::W);
        assert!(!mapper.key_state(Key::W));
    }
}
