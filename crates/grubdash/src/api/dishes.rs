//! Route handlers for `/dishes`.

use super::request::{Envelope, Incoming, RequestData};
use super::{ApiError, AppState, Data};
use crate::clients::DishClient;
use crate::dish_actor::DishError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use actor_framework::ActorClient;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, instrument};

type Body = Result<Json<Envelope>, JsonRejection>;

/// Existence guard: resolves the route id to the stored dish.
async fn dish_exists(dishes: &DishClient, dish_id: &str) -> Result<Dish, ApiError> {
    let dish = dishes
        .get(DishId::from(dish_id))
        .await?
        .ok_or_else(|| DishError::NotFound(dish_id.to_string()))?;
    debug!(step = "dish-exists", "Step passed");
    Ok(dish)
}

#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Data<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list().await?;
    Ok(Json(Data::new(dishes)))
}

#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<Data<Dish>>), ApiError> {
    let Json(envelope) = body?;
    let incoming = Incoming::new(envelope.into_data());
    state.pipelines.create_dish.run(&incoming)?;

    let dish = state
        .dishes
        .create_dish(DishCreate::try_from(&incoming.data)?)
        .await?;
    Ok((StatusCode::CREATED, Json(Data::new(dish))))
}

#[instrument(skip_all, fields(dish_id = %dish_id))]
pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<Data<Dish>>, ApiError> {
    let dish = dish_exists(&state.dishes, &dish_id).await?;
    Ok(Json(Data::new(dish)))
}

#[instrument(skip_all, fields(dish_id = %dish_id))]
pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Body,
) -> Result<Json<Data<Dish>>, ApiError> {
    let current = dish_exists(&state.dishes, &dish_id).await?;
    let id = current.id.clone();
    let data: RequestData = body?.0.into_data();
    let incoming = Incoming::for_entity(dish_id, data, current);
    state.pipelines.update_dish.run(&incoming)?;

    let update = DishUpdate::try_from(&incoming.data)?;
    let dish = state.dishes.update_dish(id, update).await?;
    Ok(Json(Data::new(dish)))
}
