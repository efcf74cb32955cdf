//! Startup data for the repositories.
//!
//! A seed file is a JSON document of the form
//!
//! ```json
//! { "dishes": [ { "id": "...", "name": "...", ... } ], "orders": [ ... ] }
//! ```
//!
//! Either list may be omitted. Orders without a `status` start out `pending`.
//! Seeded entries must satisfy the same field rules as request bodies.

use crate::api::{request::RequestData, ApiError};
use crate::model::{Dish, DishCreate, Order, OrderCreate};
use actor_framework::FrameworkError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seeded {resource} {id} is invalid: {message}")]
    Invalid {
        resource: &'static str,
        id: String,
        message: String,
    },
    #[error(transparent)]
    Store(#[from] FrameworkError),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl Seed {
    /// Reads and parses a seed file.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&contents)
            .with_context(|| format!("parsing seed file {}", path.display()))?;
        info!(
            path = %path.display(),
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "Loaded seed"
        );
        Ok(seed)
    }

    /// Checks every entry against the rules a create request must pass.
    pub fn validate(&self) -> Result<(), SeedError> {
        for dish in &self.dishes {
            check("dish", dish.id.to_string(), dish, |data| {
                DishCreate::try_from(data).map(drop)
            })?;
        }
        for order in &self.orders {
            check("order", order.id.to_string(), order, |data| {
                OrderCreate::try_from(data).map(drop)
            })?;
        }
        Ok(())
    }
}

fn check<T: Serialize>(
    resource: &'static str,
    id: String,
    entry: &T,
    rules: impl FnOnce(&RequestData) -> Result<(), ApiError>,
) -> Result<(), SeedError> {
    let invalid = |message: String| SeedError::Invalid {
        resource,
        id: id.clone(),
        message,
    };
    let value = serde_json::to_value(entry).map_err(|e| invalid(e.to_string()))?;
    rules(&RequestData::from(value)).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use std::io::Write;

    #[tokio::test]
    async fn loads_dishes_and_orders() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "dishes": [{{
                    "id": "d351db2b49b69679504652ea1cf38241",
                    "name": "Dolcelatte and chickpea spaghetti",
                    "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                    "price": 19,
                    "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg"
                }}],
                "orders": [{{
                    "id": "f6069a542257054114138301947672ba",
                    "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
                    "mobileNumber": "(202) 456-1111",
                    "status": "out-for-delivery",
                    "dishes": [{{ "id": "d351db2b49b69679504652ea1cf38241", "quantity": 2 }}]
                }}]
            }}"#
        )
        .unwrap();

        let seed = Seed::load(file.path()).await.unwrap();
        assert_eq!(seed.dishes[0].price, 19);
        assert_eq!(seed.orders[0].status, OrderStatus::OutForDelivery);
    }

    #[tokio::test]
    async fn missing_lists_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        assert_eq!(Seed::load(file.path()).await.unwrap(), Seed::default());
    }

    #[test]
    fn entries_follow_the_request_rules() {
        let seed: Seed = serde_json::from_value(serde_json::json!({
            "dishes": [{ "id": "d1", "name": "", "description": "", "price": 0, "image_url": "" }]
        }))
        .unwrap();
        let err = seed.validate().unwrap_err();
        assert!(matches!(&err, SeedError::Invalid { resource: "dish", id, .. } if id == "d1"));
        assert_eq!(err.to_string(), "Seeded dish d1 is invalid: Dish must include a name");

        let seed: Seed = serde_json::from_value(serde_json::json!({
            "orders": [{ "id": "o1", "deliverTo": "1 Main", "mobileNumber": "555", "dishes": [] }]
        }))
        .unwrap();
        assert_eq!(
            seed.validate().unwrap_err().to_string(),
            "Seeded order o1 is invalid: Order must include at least one dish"
        );

        let seed: Seed = serde_json::from_value(serde_json::json!({
            "orders": [{
                "id": "o2",
                "deliverTo": "1 Main",
                "mobileNumber": "555",
                "dishes": [{ "dishId": "d1", "quantity": 0 }]
            }]
        }))
        .unwrap();
        assert!(matches!(
            seed.validate(),
            Err(SeedError::Invalid { resource: "order", id, .. }) if id == "o2"
        ));
    }

    #[tokio::test]
    async fn unreadable_file_names_the_path() {
        let err = Seed::load("/definitely/not/here.json").await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
