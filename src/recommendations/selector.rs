use serde::Serialize;
use tracing::debug;

use super::scoring::ScoringStrategy;
use crate::analytics::GoalSet;
use crate::dishes::{Catalog, Dish};
use crate::meals::Meal;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub dish: Dish,
    pub reason: String,
    pub confidence: f64,
}

pub struct RecommendationSelector {
    strategy: Box<dyn ScoringStrategy>,
    limit: Option<usize>,
    min_confidence: f64,
}

impl RecommendationSelector {
    pub fn new(strategy: impl ScoringStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            limit: None,
            min_confidence: 0.0,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Scored dishes, highest confidence first; equal confidence keeps catalog order.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        history: &[Meal],
        goals: &GoalSet,
    ) -> Vec<Recommendation> {
        let mut picks: Vec<Recommendation> = catalog
            .iter()
            .filter_map(|dish| {
                let scored = self.strategy.score(dish, history, goals)?;
                Some(Recommendation {
                    dish: dish.clone(),
                    reason: scored.reason,
                    confidence: clamp_confidence(scored.confidence),
                })
            })
            .filter(|r| r.confidence >= self.min_confidence)
            .collect();

        // stable sort: ties stay in catalog order
        picks.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        if let Some(limit) = self.limit {
            picks.truncate(limit);
        }
        debug!(count = picks.len(), "recommendations selected");
        picks
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
