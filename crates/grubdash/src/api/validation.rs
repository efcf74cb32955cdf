//! The checks the resource pipelines are built from, and the pipelines themselves.

use super::pipeline::Pipeline;
use super::request::Incoming;
use super::ApiError;
use crate::model::{Dish, Order, OrderStatus};
use serde_json::Value;

/// Requires `field` to be a non-empty string.
pub fn text_field<T: 'static>(
    resource: &'static str,
    field: &'static str,
) -> impl Fn(&Incoming<T>) -> Result<(), ApiError> + Send + Sync + 'static {
    move |incoming| incoming.data.text(resource, field).map(drop)
}

/// Requires `field` to be present and truthy.
pub fn present_field<T: 'static>(
    resource: &'static str,
    field: &'static str,
) -> impl Fn(&Incoming<T>) -> Result<(), ApiError> + Send + Sync + 'static {
    move |incoming| incoming.data.present(resource, field).map(drop)
}

pub fn price<T>(incoming: &Incoming<T>) -> Result<(), ApiError> {
    incoming.data.price().map(drop)
}

pub fn dishes_ok<T>(incoming: &Incoming<T>) -> Result<(), ApiError> {
    incoming.data.line_items().map(drop)
}

/// Rejects a body `id` that disagrees with the route id. A missing body id defers to
/// the route.
pub fn ids_match<T: 'static>(
    resource: &'static str,
) -> impl Fn(&Incoming<T>) -> Result<(), ApiError> + Send + Sync + 'static {
    move |incoming| {
        let (Some(body_id), Some(route_id)) = (incoming.data.body_id(), &incoming.route_id)
        else {
            return Ok(());
        };
        let matches = matches!(body_id, Value::String(id) if id == route_id);
        if matches {
            return Ok(());
        }
        let body_id = match body_id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        };
        Err(ApiError::InvalidRequest(format!(
            "{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}"
        )))
    }
}

/// A delivered order is frozen; otherwise the requested status must be a known label.
pub fn status_ok(incoming: &Incoming<Order>) -> Result<(), ApiError> {
    if let Some(order) = &incoming.current {
        if order.status == OrderStatus::Delivered {
            return Err(ApiError::InvalidRequest(
                "A delivered order cannot be changed".to_string(),
            ));
        }
    }
    incoming.data.status().map(drop)
}

pub fn ok_to_delete(incoming: &Incoming<Order>) -> Result<(), ApiError> {
    match &incoming.current {
        Some(order) if order.status != OrderStatus::Pending => Err(ApiError::InvalidRequest(
            "An order cannot be deleted unless it is pending.".to_string(),
        )),
        _ => Ok(()),
    }
}

fn dish_fields(pipeline: Pipeline<Incoming<Dish>>) -> Pipeline<Incoming<Dish>> {
    pipeline
        .step("name", text_field("Dish", "name"))
        .step("description", text_field("Dish", "description"))
        .step("price", price)
        .step("image_url", text_field("Dish", "image_url"))
}

fn order_fields(pipeline: Pipeline<Incoming<Order>>) -> Pipeline<Incoming<Order>> {
    pipeline
        .step("deliverTo", text_field("Order", "deliverTo"))
        .step("mobileNumber", text_field("Order", "mobileNumber"))
        .step("dishes", present_field("Order", "dishes"))
        .step("dishes-ok", dishes_ok)
}

/// The pipelines run by the route handlers. Existence guards run before these, since
/// they need the repository.
#[derive(Debug)]
pub struct Pipelines {
    pub create_dish: Pipeline<Incoming<Dish>>,
    pub update_dish: Pipeline<Incoming<Dish>>,
    pub create_order: Pipeline<Incoming<Order>>,
    pub update_order: Pipeline<Incoming<Order>>,
    pub delete_order: Pipeline<Incoming<Order>>,
}

impl Default for Pipelines {
    fn default() -> Self {
        Self {
            create_dish: dish_fields(Pipeline::new("create-dish")),
            update_dish: dish_fields(
                Pipeline::new("update-dish").step("id-match", ids_match("Dish")),
            ),
            create_order: order_fields(Pipeline::new("create-order")),
            update_order: order_fields(Pipeline::new("update-order"))
                .step("status", status_ok)
                .step("id-match", ids_match("Order")),
            delete_order: Pipeline::new("delete-order").step("ok-to-delete", ok_to_delete),
        }
    }
}
