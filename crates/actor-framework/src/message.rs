//! # Generic Messages
//!
//! The messages exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The Repository Pattern
/// The variants map to the operations of a plain repository:
///
/// - **List**: every stored entity, in insertion order.
/// - **Get**: one entity by ID, or `None`.
/// - **Create**: builds an entity from [`ActorEntity::Create`] under a freshly generated ID.
/// - **Update**: applies [`ActorEntity::Update`] through [`ActorEntity::on_update`].
/// - **Delete**: removes an entity once [`ActorEntity::on_delete`] allows it.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
