//! [`ActorEntity`] implementation for [`Dish`].

use super::DishError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        })
    }

    /// Replaces every field except the id.
    async fn on_update(&mut self, update: DishUpdate) -> Result<(), Self::Error> {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.image_url = update.image_url;
        Ok(())
    }
}
