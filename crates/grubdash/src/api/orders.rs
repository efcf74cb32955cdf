//! Route handlers for `/orders`.

use super::request::{Envelope, Incoming, RequestData};
use super::{ApiError, AppState, Data};
use crate::clients::OrderClient;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, instrument};

type Body = Result<Json<Envelope>, JsonRejection>;

/// Existence guard: resolves the route id to the stored order.
async fn order_exists(orders: &OrderClient, order_id: &str) -> Result<Order, ApiError> {
    let order = orders
        .get(OrderId::from(order_id))
        .await?
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
    debug!(step = "order-exists", "Step passed");
    Ok(order)
}

#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Data<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(Data::new(orders)))
}

#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<Data<Order>>), ApiError> {
    let Json(envelope) = body?;
    let incoming = Incoming::new(envelope.into_data());
    state.pipelines.create_order.run(&incoming)?;

    let order = state
        .orders
        .create_order(OrderCreate::try_from(&incoming.data)?)
        .await?;
    Ok((StatusCode::CREATED, Json(Data::new(order))))
}

#[instrument(skip_all, fields(order_id = %order_id))]
pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Data<Order>>, ApiError> {
    let order = order_exists(&state.orders, &order_id).await?;
    Ok(Json(Data::new(order)))
}

#[instrument(skip_all, fields(order_id = %order_id))]
pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Body,
) -> Result<Json<Data<Order>>, ApiError> {
    let current = order_exists(&state.orders, &order_id).await?;
    let id = current.id.clone();
    let data: RequestData = body?.0.into_data();
    let incoming = Incoming::for_entity(order_id, data, current);
    state.pipelines.update_order.run(&incoming)?;

    let update = OrderUpdate::try_from(&incoming.data)?;
    let order = state.orders.update_order(id, update).await?;
    Ok(Json(Data::new(order)))
}

#[instrument(skip_all, fields(order_id = %order_id))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let current = order_exists(&state.orders, &order_id).await?;
    let id = current.id.clone();
    let incoming = Incoming::for_entity(order_id, RequestData::default(), current);
    state.pipelines.delete_order.run(&incoming)?;

    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
