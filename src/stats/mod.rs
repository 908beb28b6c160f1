mod dto;
pub mod handlers;
pub mod streaks;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::stats_routes()
}
