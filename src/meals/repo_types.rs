use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::dates::iso_date;
use crate::nutrients::Macros;

/// A logged serving of a dish. The macro snapshot is taken when the meal is
/// logged and never recomputed, so later catalog edits leave history intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub dish_id: String,
    pub dish_name: String,
    pub unit: String,
    pub logged_serving_size: f64,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(flatten)]
    pub macros: Macros,
}
