//! Error types for the Dish actor.

use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// The requested dish was not found.
    #[error("Dish does not exist: {0}.")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DishError {
    fn from(msg: String) -> Self {
        DishError::ActorCommunicationError(msg)
    }
}
