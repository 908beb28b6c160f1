mod dto;
pub mod handlers;
pub mod scoring;
pub mod selector;

pub use scoring::{Scored, ScoringStrategy, StaticScores};
pub use selector::{Recommendation, RecommendationSelector};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::recommendation_routes()
}
