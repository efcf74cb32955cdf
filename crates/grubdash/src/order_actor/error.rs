//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order does not exist: {0}.")]
    NotFound(String),

    /// The order was already delivered and is frozen.
    #[error("A delivered order cannot be changed")]
    Delivered,

    /// Only pending orders may be deleted.
    #[error("An order cannot be deleted unless it is pending.")]
    NotPending { status: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
