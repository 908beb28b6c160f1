use serde::Serialize;

use super::Recommendation;
use crate::dishes::Dish;

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub dish: Dish,
    pub reason: String,
    pub confidence: f64,
    pub match_percent: u8,
}

impl From<Recommendation> for RecommendationItem {
    fn from(r: Recommendation) -> Self {
        Self {
            match_percent: (r.confidence * 100.0).round() as u8,
            dish: r.dish,
            reason: r.reason,
            confidence: r.confidence,
        }
    }
}
