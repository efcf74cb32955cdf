//! # Order Actor
//!
//! Owns the order book. Unlike dishes, orders carry lifecycle rules that the actor
//! enforces at the moment a mutation is applied:
//!
//! - a `delivered` order can no longer be updated
//! - only a `pending` order can be deleted
//!
//! The HTTP layer checks the same rules up front to produce friendly errors, but
//! only the actor sees the entity exactly as stored.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::ids::random_hex_id;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, || OrderId::from(random_hex_id()));
    (actor, OrderClient::new(generic_client))
}
