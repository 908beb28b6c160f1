use std::{fmt::Display, path::PathBuf, str::FromStr};

use anyhow::Context;
use serde::Deserialize;

use crate::analytics::GoalSet;

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    pub limit: Option<usize>,
    pub min_confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub goals: GoalSet,
    pub recommendations: RecommendationConfig,
    pub seed_demo_meals: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            catalog_path: None,
            goals: GoalSet::default(),
            recommendations: RecommendationConfig {
                limit: None,
                min_confidence: 0.0,
            },
            seed_demo_meals: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let goals = GoalSet::new(
            parse_or(&var, "GOAL_CALORIES", defaults.goals.calories)?,
            parse_or(&var, "GOAL_PROTEIN", defaults.goals.protein)?,
            parse_or(&var, "GOAL_CARBS", defaults.goals.carbs)?,
            parse_or(&var, "GOAL_FAT", defaults.goals.fat)?,
        )
        .context("daily goals")?;

        let limit = match var("RECOMMENDATION_LIMIT") {
            Some(raw) => Some(parse("RECOMMENDATION_LIMIT", &raw)?),
            None => None,
        };
        let min_confidence = parse_or(&var, "RECOMMENDATION_MIN_CONFIDENCE", 0.0_f64)?;
        anyhow::ensure!(
            (0.0..=1.0).contains(&min_confidence),
            "RECOMMENDATION_MIN_CONFIDENCE must be within [0, 1], got {min_confidence}"
        );

        Ok(Self {
            host: var("APP_HOST").unwrap_or(defaults.host),
            port: parse_or(&var, "APP_PORT", defaults.port)?,
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            goals,
            recommendations: RecommendationConfig {
                limit,
                min_confidence,
            },
            seed_demo_meals: parse_or(&var, "SEED_DEMO_MEALS", defaults.seed_demo_meals)?,
        })
    }
}

fn parse<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("invalid {key} value {raw:?}: {e}"))
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.goals, GoalSet::default());
        assert!(cfg.catalog_path.is_none());
        assert!(cfg.recommendations.limit.is_none());
        assert!(!cfg.seed_demo_meals);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("APP_PORT", "9090"),
            ("GOAL_PROTEIN", "120"),
            ("CATALOG_PATH", "/etc/dishes.json"),
            ("RECOMMENDATION_LIMIT", "2"),
            ("SEED_DEMO_MEALS", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.goals.protein, 120.0);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/etc/dishes.json")));
        assert_eq!(cfg.recommendations.limit, Some(2));
        assert!(cfg.seed_demo_meals);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("APP_PORT", "eighty")]).is_err());
        assert!(load(&[("GOAL_FAT", "0")]).is_err());
        assert!(load(&[("GOAL_CALORIES", "-2000")]).is_err());
        assert!(load(&[("RECOMMENDATION_MIN_CONFIDENCE", "1.5")]).is_err());
    }
}
