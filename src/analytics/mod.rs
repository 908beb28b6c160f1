pub mod aggregator;
mod dto;
pub mod goals;
pub mod handlers;
pub mod services;

pub use goals::{Band, GoalReport, GoalSet};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::analytics_routes()
}
