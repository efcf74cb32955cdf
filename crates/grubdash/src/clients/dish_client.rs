//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes domain‑specific methods.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, update: DishUpdate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DishError::NotFound(id),
            other => other
                .into_entity_error::<DishError>()
                .unwrap_or_else(|e| DishError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    fn update() -> DishUpdate {
        DishUpdate {
            name: "Stew".into(),
            description: "Slow cooked".into(),
            price: 12,
            image_url: "stew.png".into(),
        }
    }

    #[tokio::test]
    async fn update_of_unknown_dish_is_not_found() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_update(DishId::from("missing"))
            .return_err(FrameworkError::NotFound("missing".into()));

        let client = DishClient::new(mock.client());
        let result = client.update_dish(DishId::from("missing"), update()).await;

        assert_eq!(result, Err(DishError::NotFound("missing".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = DishClient::new(mock.client());
        let result = client.list().await;

        assert_eq!(
            result,
            Err(DishError::ActorCommunicationError("Actor closed".into()))
        );
        mock.verify();
    }
}
