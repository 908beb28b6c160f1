use serde::{Deserialize, Serialize};
use time::Date;

use super::streaks::{Achievement, LevelProgress, Milestone};
use crate::dates::iso_date;

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(with = "iso_date")]
    pub today: Date,
    pub total_meals: usize,
    pub total_days: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub milestones: Vec<Milestone>,
    pub achievements: Vec<Achievement>,
    pub level: LevelProgress,
    pub badge: &'static str,
}
