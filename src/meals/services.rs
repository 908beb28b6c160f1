use time::{macros::date, Date};
use tracing::info;

use crate::analytics::aggregator;
use crate::dates::DateFilter;
use crate::error::NutritionError;
use crate::meals::dto::{HistoryDay, HistoryResponse};
use crate::meals::repo::Ledger;
use crate::meals::repo_types::Meal;

/// Demo history shown on first launch: (dish id, serving size, date).
const DEMO_MEALS: [(&str, f64, Date); 5] = [
    ("1", 150.0, date!(2024 - 01 - 20)),
    ("2", 200.0, date!(2024 - 01 - 20)),
    ("5", 1.0, date!(2024 - 01 - 19)),
    ("7", 250.0, date!(2024 - 01 - 19)),
    ("6", 120.0, date!(2024 - 01 - 18)),
];

pub fn seed_demo_meals(ledger: &mut Ledger) -> Result<Vec<Meal>, NutritionError> {
    let meals = DEMO_MEALS
        .iter()
        .map(|&(dish_id, serving, date)| ledger.add(dish_id, serving, date))
        .collect::<Result<Vec<_>, _>>()?;
    info!(meals = meals.len(), "demo meals seeded");
    Ok(meals)
}

/// Meals matching the optional filter, oldest first.
pub fn select_meals(ledger: &Ledger, filter: Option<&DateFilter>) -> Vec<Meal> {
    let mut meals = match filter {
        Some(f) => ledger.filter_by_date(f),
        None => ledger.list().to_vec(),
    };
    meals.sort_by_key(|m| m.date);
    meals
}

/// History screen: filtered meals grouped per day, newest day first, with
/// display-rounded totals.
pub fn history(ledger: &Ledger, filter: Option<&DateFilter>) -> HistoryResponse {
    let meals = select_meals(ledger, filter);
    let totals = aggregator::totals(&meals).rounded();
    let days = aggregator::group_by_date(&meals)
        .into_iter()
        .rev()
        .map(|(date, meals)| HistoryDay {
            date,
            totals: aggregator::totals(&meals).rounded(),
            meals,
        })
        .collect();

    HistoryResponse {
        meal_count: meals.len(),
        totals,
        days,
    }
}
