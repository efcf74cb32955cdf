//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
