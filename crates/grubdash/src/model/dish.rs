use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for details on:
/// - Creation parameters ([`DishCreate`])
/// - Update parameters ([`DishUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    /// Price in whole currency units, always greater than zero.
    pub price: u64,
    pub image_url: String,
}

/// Payload for creating a new dish.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Payload for updating a dish. Every mutable field is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct DishUpdate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}
