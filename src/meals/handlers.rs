use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{CreateMealRequest, DateQuery, HistoryResponse};
use super::repo_types::Meal;
use super::services;
use crate::{dates::DateFilter, error::ApiError, state::AppState};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/:id", get(get_meal))
        .route("/history", get(get_history))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal))
        .route("/meals/:id", delete(delete_meal))
}

// --- handlers ---

fn parse_filter(q: &DateQuery) -> Result<Option<DateFilter>, ApiError> {
    match q.date.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(DateFilter::parse(raw)?)),
    }
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(q): Query<DateQuery>,
) -> Result<Json<Vec<Meal>>, ApiError> {
    let filter = parse_filter(&q)?;
    let ledger = state.ledger.read().await;
    Ok(Json(services::select_meals(&ledger, filter.as_ref())))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meal>, ApiError> {
    let ledger = state.ledger.read().await;
    Ok(Json(ledger.get(id)?.clone()))
}

/// POST /meals { dish_id, serving_size, date }
#[instrument(skip(state))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(body): Json<CreateMealRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let meal = state
        .ledger
        .write()
        .await
        .add(&body.dish_id, body.serving_size, body.date)?;

    let location = format!("/api/v1/meals/{}", meal.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(meal)))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.ledger.write().await.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Query(q): Query<DateQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let filter = parse_filter(&q)?;
    let ledger = state.ledger.read().await;
    Ok(Json(services::history(&ledger, filter.as_ref())))
}
