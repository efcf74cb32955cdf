//! # ActorEntity Trait
//!
//! The contract a resource (Dish, Order, ...) implements so that a generic
//! [`ResourceActor`](crate::ResourceActor) can store it. The entity decides how it is
//! built from a create DTO, how an update DTO is applied, and whether it may be deleted.
//! The actor decides nothing about the domain; it only owns the collection.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_delete`] has a default implementation that always allows the
//! removal. Override it to veto deletes based on the entity's current state.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Associated Types
/// A `Dish` accepts a `DishCreate` payload and nothing else; the compiler rejects an
/// `OrderCreate` sent to the dish actor.
///
/// # Atomicity
/// Hooks run inside the actor's message loop, so a hook sees the entity exactly as
/// stored and no other request can interleave between its check and its mutation.
/// A hook that returns `Err` must leave `self` untouched.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per entity rather than one per operation. Clients deal with a
    /// single `OrderError`, at the cost of `create` technically being able to return
    /// variants only `delete` produces.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called when an update request is received for this entity.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
