use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument};

use super::dto::{ScaleRequest, ScaleResponse, SearchQuery};
use super::{scaler, Dish};
use crate::{error::ApiError, state::AppState};

pub fn dish_routes() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(search_dishes))
        .route("/dishes/:id", get(get_dish))
        .route("/dishes/:id/scale", post(scale_dish))
}

#[instrument(skip(state))]
pub async fn search_dishes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Dish>> {
    let found: Vec<Dish> = state.catalog.search(&query.q).into_iter().cloned().collect();
    debug!(query = %query.q, hits = found.len(), "dish search");
    Json(found)
}

#[instrument(skip(state))]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dish>, ApiError> {
    Ok(Json(state.catalog.lookup(&id)?.clone()))
}

#[instrument(skip(state))]
pub async fn scale_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ScaleRequest>,
) -> Result<Json<ScaleResponse>, ApiError> {
    let dish = state.catalog.lookup(&id)?;
    let macros = scaler::scale(dish, body.serving_size)?;
    Ok(Json(ScaleResponse {
        dish_id: dish.id.clone(),
        serving_size: body.serving_size,
        unit: dish.reference_unit.clone(),
        macros,
    }))
}
