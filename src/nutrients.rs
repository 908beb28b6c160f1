use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Calories (kcal) plus protein, carbs and fat (grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
        }
    }

    /// Display precision: whole calories, grams to one decimal.
    pub fn rounded(self) -> Self {
        Self {
            calories: round_to(self.calories, 0),
            protein: round_to(self.protein, 1),
            carbs: round_to(self.carbs, 1),
            fat: round_to(self.fat, 1),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::ZERO, Add::add)
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
