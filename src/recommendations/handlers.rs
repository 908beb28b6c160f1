use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::dto::RecommendationItem;
use crate::state::AppState;

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations", get(list_recommendations))
}

#[instrument(skip(state))]
pub async fn list_recommendations(State(state): State<AppState>) -> Json<Vec<RecommendationItem>> {
    let ledger = state.ledger.read().await;
    let picks = state
        .recommender
        .recommend(&state.catalog, ledger.list(), &state.config.goals);
    Json(picks.into_iter().map(RecommendationItem::from).collect())
}
