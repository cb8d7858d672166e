//! Keyboard and mouse input mapped onto named actions.
//!
//! Raw key transitions go in, per-frame action states come out. Actions
//! bind one or more keys (optionally as a chord), pick an activation mode
//! (continuous, press-edge, release-edge), and may carry a callback that
//! runs on every active frame.

mod action;
mod error;
mod keys;
mod mapper;

pub use action::{ActionConfig, ActivationMode};
pub use error::InputError;
pub use keys::Key;
pub use mapper::InputMapper;
