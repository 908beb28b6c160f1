use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::iso_date;
use crate::meals::repo_types::Meal;
use crate::nutrients::Macros;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub dish_id: String,
    pub serving_size: f64,
    #[serde(with = "iso_date")]
    pub date: Date,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryDay {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub totals: Macros,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub meal_count: usize,
    pub totals: Macros,
    pub days: Vec<HistoryDay>, // newest first
}
