use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use time::Date;

use crate::dates::iso_date;
use crate::meals::Meal;
use crate::nutrients::Macros;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(flatten)]
    pub macros: Macros,
}

/// Energy contributed by each macro plus its whole-percent share.
/// Shares are rounded independently and may not add up to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroDistribution {
    pub protein_kcal: f64,
    pub carbs_kcal: f64,
    pub fat_kcal: f64,
    pub protein_percent: u8,
    pub carbs_percent: u8,
    pub fat_percent: u8,
}

pub fn totals(meals: &[Meal]) -> Macros {
    meals.iter().map(|m| m.macros).sum()
}

/// Groups meals by their date; each group keeps input order.
pub fn group_by_date(meals: &[Meal]) -> BTreeMap<Date, Vec<Meal>> {
    let mut groups: BTreeMap<Date, Vec<Meal>> = BTreeMap::new();
    for meal in meals {
        groups.entry(meal.date).or_default().push(meal.clone());
    }
    groups
}

/// One entry per distinct date, ascending.
pub fn daily_totals(meals: &[Meal]) -> Vec<DailyTotals> {
    let mut per_day: BTreeMap<Date, Macros> = BTreeMap::new();
    for meal in meals {
        *per_day.entry(meal.date).or_default() += meal.macros;
    }
    per_day
        .into_iter()
        .map(|(date, macros)| DailyTotals { date, macros })
        .collect()
}

/// Mean per macro over the distinct dates in `days`. Entries sharing a date
/// count as one day. No days yields zero.
pub fn daily_averages(days: &[DailyTotals]) -> Macros {
    let distinct: BTreeSet<Date> = days.iter().map(|d| d.date).collect();
    if distinct.is_empty() {
        return Macros::ZERO;
    }
    let n = distinct.len() as f64;
    days.iter().map(|d| d.macros).sum::<Macros>().map(|v| v / n)
}

pub fn macro_distribution(totals: &Macros) -> MacroDistribution {
    let protein_kcal = totals.protein * KCAL_PER_GRAM_PROTEIN;
    let carbs_kcal = totals.carbs * KCAL_PER_GRAM_CARBS;
    let fat_kcal = totals.fat * KCAL_PER_GRAM_FAT;
    let energy = protein_kcal + carbs_kcal + fat_kcal;
    if energy <= 0.0 {
        return MacroDistribution::default();
    }

    let share = |kcal: f64| (kcal / energy * 100.0).round().clamp(0.0, 100.0) as u8;
    MacroDistribution {
        protein_kcal,
        carbs_kcal,
        fat_kcal,
        protein_percent: share(protein_kcal),
        carbs_percent: share(carbs_kcal),
        fat_percent: share(fat_kcal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use uuid::Uuid;

    fn meal(date: Date, calories: f64, protein: f64) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            dish_id: "1".into(),
            dish_name: "Test".into(),
            unit: "g".into(),
            logged_serving_size: 100.0,
            date,
            macros: Macros {
                calories,
                protein,
                carbs: 10.0,
                fat: 2.5,
            },
        }
    }

    #[test]
    fn totals_of_nothing_is_zero() {
        assert_eq!(totals(&[]), Macros::ZERO);
    }

    #[test]
    fn totals_ignore_order() {
        let meals = vec![
            meal(date!(2024 - 01 - 20), 248.0, 46.5),
            meal(date!(2024 - 01 - 19), 222.0, 5.2),
            meal(date!(2024 - 01 - 18), 130.0, 8.0),
        ];
        let mut reversed = meals.clone();
        reversed.reverse();
        let mut rotated = meals.clone();
        rotated.rotate_left(1);

        let expected = totals(&meals);
        assert_eq!(expected.calories, 600.0);
        assert_eq!(expected.carbs, 30.0);
        assert_eq!(totals(&reversed).rounded(), expected.rounded());
        assert_eq!(totals(&rotated).rounded(), expected.rounded());
    }

    #[test]
    fn groups_by_date_preserving_order() {
        let first = meal(date!(2024 - 01 - 20), 100.0, 1.0);
        let second = meal(date!(2024 - 01 - 19), 200.0, 2.0);
        let third = meal(date!(2024 - 01 - 20), 300.0, 3.0);
        let groups = group_by_date(&[first.clone(), second.clone(), third.clone()]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&date!(2024 - 01 - 20)], vec![first, third]);
        assert_eq!(groups[&date!(2024 - 01 - 19)], vec![second]);
    }

    #[test]
    fn daily_totals_sum_each_day() {
        let meals = vec![
            meal(date!(2024 - 01 - 20), 100.0, 1.0),
            meal(date!(2024 - 01 - 19), 200.0, 2.0),
            meal(date!(2024 - 01 - 20), 300.0, 3.0),
        ];
        let days = daily_totals(&meals);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date!(2024 - 01 - 19));
        assert_eq!(days[0].macros.calories, 200.0);
        assert_eq!(days[1].macros.calories, 400.0);
        assert_eq!(days[1].macros.fat, 5.0);
    }

    #[test]
    fn averages_over_days() {
        assert_eq!(daily_averages(&[]), Macros::ZERO);

        let day = |date, calories| DailyTotals {
            date,
            macros: Macros {
                calories,
                protein: 120.0,
                carbs: 180.0,
                fat: 60.0,
            },
        };
        let avg = daily_averages(&[
            day(date!(2024 - 01 - 15), 1850.0),
            day(date!(2024 - 01 - 16), 2150.0),
        ]);
        assert_eq!(avg.calories, 2000.0);
        assert_eq!(avg.protein, 120.0);
    }

    #[test]
    fn averages_count_repeated_dates_once() {
        let entry = |date, calories| DailyTotals {
            date,
            macros: Macros {
                calories,
                ..Macros::ZERO
            },
        };
        let avg = daily_averages(&[
            entry(date!(2024 - 01 - 15), 1000.0),
            entry(date!(2024 - 01 - 16), 2000.0),
            entry(date!(2024 - 01 - 15), 1000.0),
        ]);
        assert_eq!(avg.calories, 2000.0);
    }

    #[test]
    fn distribution_uses_atwater_factors() {
        let d = macro_distribution(&Macros {
            calories: 2180.0,
            protein: 145.0,
            carbs: 220.0,
            fat: 68.0,
        });
        assert_eq!(d.protein_kcal, 580.0);
        assert_eq!(d.carbs_kcal, 880.0);
        assert_eq!(d.fat_kcal, 612.0);
        assert_eq!((d.protein_percent, d.carbs_percent, d.fat_percent), (28, 42, 30));

        assert_eq!(macro_distribution(&Macros::ZERO), MacroDistribution::default());
    }
}
