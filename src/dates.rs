//! Calendar-day helpers. Dates travel as ISO `YYYY-MM-DD` strings.

use time::{macros::format_description, Date};

use crate::error::NutritionError;

pub fn parse_iso(raw: &str) -> Result<Date, NutritionError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| NutritionError::InvalidInput(format!("invalid date {raw:?}: {e}")))
}

/// Serde adapter for `Date` fields.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso(&raw).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use serde::Serializer;
        use time::Date;

        pub fn serialize<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => serializer.collect_str(d),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// How the meal history is narrowed down by date.
///
/// `Exact` is what any full ISO date parses to. `Prefix` only ever matches the
/// beginning of the ISO rendering, so `"2024-01"` selects a month and `"20"`
/// selects years 2000-2099, never the 20th day of a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    Exact(Date),
    Prefix(String),
}

impl DateFilter {
    pub fn parse(raw: &str) -> Result<Self, NutritionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(NutritionError::InvalidInput("empty date filter".into()));
        }
        if let Ok(date) = parse_iso(raw) {
            return Ok(Self::Exact(date));
        }
        if raw.len() < 10 && raw.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Ok(Self::Prefix(raw.to_string()));
        }
        Err(NutritionError::InvalidInput(format!(
            "date filter {raw:?} is neither a date nor a date prefix"
        )))
    }

    pub fn matches(&self, date: &Date) -> bool {
        match self {
            Self::Exact(wanted) => wanted == date,
            Self::Prefix(prefix) => date.to_string().starts_with(prefix.as_str()),
        }
    }
}
