//! # HTTP API
//!
//! | Method | Path | Steps |
//! |--------|------|-------|
//! | GET | `/dishes` | list |
//! | POST | `/dishes` | name, description, price, image_url, create |
//! | GET | `/dishes/{dishId}` | dish-exists, read |
//! | PUT | `/dishes/{dishId}` | dish-exists, id-match, name, description, price, image_url, update |
//! | GET | `/orders` | list |
//! | POST | `/orders` | deliverTo, mobileNumber, dishes, dishes-ok, create |
//! | GET | `/orders/{orderId}` | order-exists, read |
//! | PUT | `/orders/{orderId}` | order-exists, deliverTo, mobileNumber, dishes, dishes-ok, status, id-match, update |
//! | DELETE | `/orders/{orderId}` | order-exists, ok-to-delete, destroy |
//!
//! Successful responses wrap their payload as `{ "data": ... }`; see [`ApiError`] for
//! the error shape.

pub mod dishes;
pub mod error;
pub mod orders;
pub mod pipeline;
pub mod request;
pub mod validation;

pub use error::ApiError;

use crate::clients::{DishClient, OrderClient};
use crate::lifecycle::GrubDashSystem;
use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use validation::Pipelines;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
    pub pipelines: Arc<Pipelines>,
}

impl AppState {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self {
            dishes,
            orders,
            pipelines: Arc::new(Pipelines::default()),
        }
    }
}

impl From<&GrubDashSystem> for AppState {
    fn from(system: &GrubDashSystem) -> Self {
        Self::new(system.dish_client.clone(), system.order_client.clone())
    }
}

/// The success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/dishes",
            get(dishes::list)
                .post(dishes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dishId}",
            get(dishes::read)
                .put(dishes::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(orders::list)
                .post(orders::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{orderId}",
            get(orders::read)
                .put(orders::update)
                .delete(orders::destroy)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
