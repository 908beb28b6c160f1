use serde::Serialize;
use time::Date;

use super::aggregator::{DailyTotals, MacroDistribution};
use super::goals::{GoalReport, GoalSet};
use crate::nutrients::Macros;

#[derive(Debug, Serialize)]
pub struct LatestDay {
    #[serde(with = "crate::dates::iso_date::option")]
    pub date: Option<Date>,
    pub totals: Macros,
    pub progress: GoalReport,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub days_logged: usize,
    pub daily: Vec<DailyTotals>,
    pub averages: Macros,
    pub average_progress: GoalReport,
    pub latest: LatestDay,
    pub distribution: MacroDistribution,
    pub goals: GoalSet,
}
