use serde::{Deserialize, Serialize};

use crate::nutrients::Macros;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ScaleRequest {
    pub serving_size: f64,
}

/// Live preview for the meal logger; nothing is recorded.
#[derive(Debug, Serialize)]
pub struct ScaleResponse {
    pub dish_id: String,
    pub serving_size: f64,
    pub unit: String,
    #[serde(flatten)]
    pub macros: Macros,
}
