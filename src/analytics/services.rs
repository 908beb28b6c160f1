use super::aggregator::{daily_averages, daily_totals, macro_distribution};
use super::dto::{AnalyticsResponse, LatestDay};
use super::goals::{evaluate, GoalSet};
use crate::error::NutritionError;
use crate::meals::Meal;

/// Analytics screen: per-day totals, daily averages, the most recent day
/// against goals and the energy split of that day.
pub fn analytics(meals: &[Meal], goals: &GoalSet) -> Result<AnalyticsResponse, NutritionError> {
    let daily = daily_totals(meals);
    let averages = daily_averages(&daily);

    let latest_date = daily.last().map(|d| d.date);
    let latest_totals = daily.last().map(|d| d.macros).unwrap_or_default();

    Ok(AnalyticsResponse {
        days_logged: daily.len(),
        averages: averages.rounded(),
        average_progress: evaluate(goals, &averages)?,
        latest: LatestDay {
            date: latest_date,
            totals: latest_totals.rounded(),
            progress: evaluate(goals, &latest_totals)?,
        },
        distribution: macro_distribution(&latest_totals),
        goals: *goals,
        daily: daily
            .into_iter()
            .map(|mut d| {
                d.macros = d.macros.rounded();
                d
            })
            .collect(),
    })
}
