//! Logging streaks, streak milestones, achievements and level progress for
//! the gamification screen. Everything is derived from the meal log.

use std::collections::BTreeSet;

use serde::Serialize;
use time::Date;

use crate::analytics::aggregator::daily_totals;
use crate::analytics::goals::{self, GoalSet};
use crate::error::NutritionError;
use crate::meals::Meal;

pub const XP_PER_MEAL: u32 = 50;
pub const XP_PER_LEVEL: u32 = 1000;

/// (streak length in days, XP reward)
pub const STREAK_MILESTONES: [(u32, u32); 5] =
    [(7, 100), (14, 200), (30, 500), (60, 1000), (100, 2000)];

/// Badge titles for levels 1 through 8. Higher levels keep the last title.
pub const LEVEL_BADGES: [&str; 8] = [
    "Beginner",
    "Tracker",
    "Committed",
    "Dedicated",
    "Expert",
    "Master",
    "Champion",
    "Legend",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Meals,
    Streak,
    ProteinGoalDays,
    PerfectRun,
}

struct AchievementRule {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    reward_xp: u32,
    metric: Metric,
    target: u32,
}

const ACHIEVEMENTS: [AchievementRule; 6] = [
    AchievementRule {
        id: "first-steps",
        title: "First Steps",
        description: "Log your first meal",
        reward_xp: 50,
        metric: Metric::Meals,
        target: 1,
    },
    AchievementRule {
        id: "week-warrior",
        title: "Week Warrior",
        description: "Log meals for 7 consecutive days",
        reward_xp: 200,
        metric: Metric::Streak,
        target: 7,
    },
    AchievementRule {
        id: "streak-master",
        title: "Streak Master",
        description: "Maintain a 14-day streak",
        reward_xp: 500,
        metric: Metric::Streak,
        target: 14,
    },
    AchievementRule {
        id: "protein-power",
        title: "Protein Power",
        description: "Hit protein goal 10 times",
        reward_xp: 150,
        metric: Metric::ProteinGoalDays,
        target: 10,
    },
    AchievementRule {
        id: "century-club",
        title: "Century Club",
        description: "Log 100 meals",
        reward_xp: 1000,
        metric: Metric::Meals,
        target: 100,
    },
    AchievementRule {
        id: "nutrition-ninja",
        title: "Nutrition Ninja",
        description: "Perfect week (all goals met)",
        reward_xp: 750,
        metric: Metric::PerfectRun,
        target: 7,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub days: u32,
    pub reward_xp: u32,
    pub unlocked: bool,
    /// Days left on the current streak, zero once reached.
    pub days_to_go: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reward_xp: u32,
    pub unlocked: bool,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub percent: u8,
}

/// What achievements are judged against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activity {
    pub meal_count: usize,
    pub longest_streak: u32,
    /// Days whose protein total reached the goal.
    pub protein_goal_days: u32,
    /// Longest run of consecutive days with every goal reached.
    pub longest_perfect_run: u32,
}

impl Activity {
    /// A goal counts as reached when its progress rounds to 100%.
    pub fn from_meals(meals: &[Meal], goals: &GoalSet) -> Result<Self, NutritionError> {
        let mut protein_goal_days = 0;
        let mut perfect_days = BTreeSet::new();
        for day in daily_totals(meals) {
            let report = goals::evaluate(goals, &day.macros)?;
            if report.protein.percent == 100 {
                protein_goal_days += 1;
            }
            let all_met = [report.calories, report.protein, report.carbs, report.fat]
                .iter()
                .all(|p| p.percent == 100);
            if all_met {
                perfect_days.insert(day.date);
            }
        }

        Ok(Self {
            meal_count: meals.len(),
            longest_streak: longest_streak(&logged_days(meals)),
            protein_goal_days,
            longest_perfect_run: longest_streak(&perfect_days),
        })
    }

    fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Meals => self.meal_count as u64,
            Metric::Streak => u64::from(self.longest_streak),
            Metric::ProteinGoalDays => u64::from(self.protein_goal_days),
            Metric::PerfectRun => u64::from(self.longest_perfect_run),
        }
    }
}

pub fn logged_days(meals: &[Meal]) -> BTreeSet<Date> {
    meals.iter().map(|m| m.date).collect()
}

/// Consecutive logged days ending today, or ending yesterday when nothing has
/// been logged yet today.
pub fn current_streak(days: &BTreeSet<Date>, today: Date) -> u32 {
    let start = if days.contains(&today) {
        today
    } else {
        match today.previous_day() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut cursor = Some(start);
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.previous_day();
    }
    streak
}

pub fn longest_streak(days: &BTreeSet<Date>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<Date> = None;
    for &day in days {
        run = match prev.and_then(|p| p.next_day()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Unlocks follow the best streak ever; `days_to_go` follows the current one.
pub fn milestones(best_streak: u32, current_streak: u32) -> Vec<Milestone> {
    STREAK_MILESTONES
        .iter()
        .map(|&(days, reward_xp)| Milestone {
            days,
            reward_xp,
            unlocked: best_streak >= days,
            days_to_go: days.saturating_sub(current_streak),
        })
        .collect()
}

/// Progress is the floored percent of the target, capped at 100.
pub fn achievements(activity: &Activity) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|rule| {
            let target = u64::from(rule.target);
            let value = activity.value(rule.metric);
            Achievement {
                id: rule.id,
                title: rule.title,
                description: rule.description,
                reward_xp: rule.reward_xp,
                unlocked: value >= target,
                progress: (value.min(target) * 100 / target) as u8,
            }
        })
        .collect()
}

pub fn badge_title(level: u32) -> &'static str {
    let idx = level.clamp(1, LEVEL_BADGES.len() as u32) - 1;
    LEVEL_BADGES[idx as usize]
}

pub fn level_progress(meal_count: usize) -> LevelProgress {
    let total = u32::try_from(meal_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(XP_PER_MEAL);
    let xp = total % XP_PER_LEVEL;
    LevelProgress {
        level: total / XP_PER_LEVEL + 1,
        xp,
        xp_to_next_level: XP_PER_LEVEL,
        percent: (f64::from(xp) / f64::from(XP_PER_LEVEL) * 100.0).round() as u8,
    }
}
