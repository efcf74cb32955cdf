//! # Dish Actor
//!
//! Owns the menu. Dishes are created and replaced wholesale; they are never deleted.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use grubdash::dish_actor;
//! use grubdash::model::DishCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let dish = client
//!         .create_dish(DishCreate {
//!             name: "Falafel".to_string(),
//!             description: "Crispy chickpea balls".to_string(),
//!             price: 8,
//!             image_url: "https://example.com/falafel.png".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(client.get(dish.id.clone()).await?, Some(dish));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DishClient;
use crate::ids::random_hex_id;
use crate::model::{Dish, DishId};
use actor_framework::ResourceActor;

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, || DishId::from(random_hex_id()));
    (actor, DishClient::new(generic_client))
}
