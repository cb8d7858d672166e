//! Input error types.

use thiserror::Error;

/// Errors raised when defining or querying actions.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input actions require a non-empty name")]
    MissingName,

    #[error("the input action {0:?} has no keys or mouse buttons bound to it")]
    NoKeysBound(String),

    #[error("the input action {0:?} does not exist")]
    UnknownAction(String),
}
