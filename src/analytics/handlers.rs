use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::dto::AnalyticsResponse;
use super::{services, GoalSet};
use crate::{error::ApiError, state::AppState};

pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route("/goals", get(get_goals))
}

#[instrument(skip(state))]
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let ledger = state.ledger.read().await;
    Ok(Json(services::analytics(ledger.list(), &state.config.goals)?))
}

pub async fn get_goals(State(state): State<AppState>) -> Json<GoalSet> {
    Json(state.config.goals)
}
