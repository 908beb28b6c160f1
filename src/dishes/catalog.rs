use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::NutritionError;
use crate::nutrients::Macros;

const BUILTIN_SEED: &str = include_str!("../../data/dishes.json");

/// Reference food. Macro values are per `reference_serving_size` of `reference_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub reference_serving_size: f64,
    pub reference_unit: String,
}

impl Dish {
    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    fn validate(&self) -> Result<(), NutritionError> {
        if self.id.trim().is_empty() {
            return Err(NutritionError::DataIntegrity("dish with empty id".into()));
        }
        if self.name.trim().is_empty() {
            return Err(NutritionError::DataIntegrity(format!(
                "dish {} has an empty name",
                self.id
            )));
        }
        let m = self.macros();
        for (label, value) in [
            ("calories", m.calories),
            ("protein", m.protein),
            ("carbs", m.carbs),
            ("fat", m.fat),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NutritionError::DataIntegrity(format!(
                    "dish {} has invalid {label}: {value}",
                    self.id
                )));
            }
        }
        if !self.reference_serving_size.is_finite() || self.reference_serving_size <= 0.0 {
            return Err(NutritionError::DataIntegrity(format!(
                "dish {} has non-positive reference serving size {}",
                self.id, self.reference_serving_size
            )));
        }
        Ok(())
    }
}

/// Immutable dish lookup, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_dishes(dishes: Vec<Dish>) -> Result<Self, NutritionError> {
        let mut index = HashMap::with_capacity(dishes.len());
        for (pos, dish) in dishes.iter().enumerate() {
            dish.validate()?;
            if index.insert(dish.id.clone(), pos).is_some() {
                return Err(NutritionError::DataIntegrity(format!(
                    "duplicate dish id {}",
                    dish.id
                )));
            }
        }
        info!(dishes = dishes.len(), "catalog loaded");
        Ok(Self { dishes, index })
    }

    pub fn from_json(raw: &str) -> Result<Self, NutritionError> {
        let dishes: Vec<Dish> = serde_json::from_str(raw)
            .map_err(|e| NutritionError::DataIntegrity(format!("malformed catalog: {e}")))?;
        Self::from_dishes(dishes)
    }

    pub fn builtin() -> Result<Self, NutritionError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn lookup(&self, id: &str) -> Result<&Dish, NutritionError> {
        self.index
            .get(id)
            .map(|&pos| &self.dishes[pos])
            .ok_or_else(|| NutritionError::dish_not_found(id))
    }

    /// Case-insensitive substring match on the name, in catalog order.
    /// A blank query returns every dish.
    pub fn search(&self, query: &str) -> Vec<&Dish> {
        let needle = query.trim().to_lowercase();
        self.dishes
            .iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
