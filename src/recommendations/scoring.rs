use std::collections::HashMap;

use crate::analytics::GoalSet;
use crate::dishes::Dish;
use crate::meals::Meal;

/// Confidence and rationale for suggesting one dish.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub confidence: f64,
    pub reason: String,
}

/// Pluggable scoring behind the recommendation selector. Returning `None`
/// leaves the dish out of the suggestions.
pub trait ScoringStrategy: Send + Sync {
    fn score(&self, dish: &Dish, history: &[Meal], goals: &GoalSet) -> Option<Scored>;
}

/// Fixed per-dish scores, independent of history and goals.
#[derive(Debug, Clone, Default)]
pub struct StaticScores {
    table: HashMap<String, Scored>,
}

impl StaticScores {
    pub fn new<I, K, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64, R)>,
        K: Into<String>,
        R: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(id, confidence, reason)| {
                (
                    id.into(),
                    Scored {
                        confidence,
                        reason: reason.into(),
                    },
                )
            })
            .collect();
        Self { table }
    }

    /// Suggestions matching the built-in catalog.
    pub fn builtin() -> Self {
        Self::new([
            ("4", 0.92, "High protein, low calories - perfect for your goals!"),
            ("3", 0.86, "You haven't had quinoa this week - great fiber source!"),
            ("8", 0.81, "Excellent breakfast option with complex carbs"),
        ])
    }
}

impl ScoringStrategy for StaticScores {
    fn score(&self, dish: &Dish, _history: &[Meal], _goals: &GoalSet) -> Option<Scored> {
        self.table.get(&dish.id).cloned()
    }
}
