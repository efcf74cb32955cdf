//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, as opposed to the domain errors an
//! entity returns from its hooks (those travel boxed inside [`FrameworkError::EntityError`]).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type, if this is an entity error of type `E`.
    ///
    /// Returns the original error unchanged when it is a runtime error or a
    /// different entity error type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(e) => match e.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(e) => Err(FrameworkError::EntityError(e)),
            },
            other => Err(other),
        }
    }
}
