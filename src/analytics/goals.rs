use serde::{Deserialize, Serialize};

use crate::error::NutritionError;
use crate::nutrients::Macros;

/// Percent of goal at or above which a macro counts as on track.
pub const ON_TRACK_PERCENT: u8 = 90;
/// Percent of goal at or above which a macro is a warning rather than behind.
pub const WARNING_PERCENT: u8 = 70;

/// Daily targets. All four must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 70.0,
        }
    }
}

impl GoalSet {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Result<Self, NutritionError> {
        let goals = Self {
            calories,
            protein,
            carbs,
            fat,
        };
        goals.validate()?;
        Ok(goals)
    }

    pub fn validate(&self) -> Result<(), NutritionError> {
        for (label, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            check_goal(label, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    OnTrack,
    Warning,
    Behind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub current: f64,
    pub goal: f64,
    pub percent: u8,
    pub band: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalReport {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

fn check_goal(label: &str, goal: f64) -> Result<(), NutritionError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "{label} goal must be positive, got {goal}"
        )));
    }
    Ok(())
}

/// `round(current / goal * 100)` clamped to 0..=100.
pub fn progress(current: f64, goal: f64) -> Result<u8, NutritionError> {
    check_goal("daily", goal)?;
    if current.is_nan() {
        return Err(NutritionError::InvalidInput("current value is NaN".into()));
    }
    Ok((current / goal * 100.0).round().clamp(0.0, 100.0) as u8)
}

pub fn band(percent: u8) -> Band {
    if percent >= ON_TRACK_PERCENT {
        Band::OnTrack
    } else if percent >= WARNING_PERCENT {
        Band::Warning
    } else {
        Band::Behind
    }
}

fn macro_progress(current: f64, goal: f64) -> Result<MacroProgress, NutritionError> {
    let percent = progress(current, goal)?;
    Ok(MacroProgress {
        current,
        goal,
        percent,
        band: band(percent),
    })
}

pub fn evaluate(goals: &GoalSet, current: &Macros) -> Result<GoalReport, NutritionError> {
    Ok(GoalReport {
        calories: macro_progress(current.calories, goals.calories)?,
        protein: macro_progress(current.protein, goals.protein)?,
        carbs: macro_progress(current.carbs, goals.carbs)?,
        fat: macro_progress(current.fat, goals.fat)?,
    })
}
