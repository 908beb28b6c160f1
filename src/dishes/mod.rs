mod catalog;
mod dto;
pub mod handlers;
pub mod scaler;

pub use catalog::{Catalog, Dish};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::dish_routes()
}
