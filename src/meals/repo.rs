use std::sync::Arc;

use time::Date;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dates::DateFilter;
use crate::dishes::{scaler, Catalog};
use crate::error::NutritionError;
use crate::meals::repo_types::Meal;

/// In-memory meal log. Owned by one place (the app state wraps it in a lock);
/// `add` and `remove` take `&mut self` so mutations are always serialized.
#[derive(Debug, Clone)]
pub struct Ledger {
    catalog: Arc<Catalog>,
    meals: Vec<Meal>,
}

impl Ledger {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            meals: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Logs `serving_size` of a catalog dish on `date`.
    pub fn add(
        &mut self,
        dish_id: &str,
        serving_size: f64,
        date: Date,
    ) -> Result<Meal, NutritionError> {
        let dish = self.catalog.lookup(dish_id)?;
        let macros = scaler::scale(dish, serving_size)?;

        let mut id = Uuid::new_v4();
        while self.meals.iter().any(|m| m.id == id) {
            id = Uuid::new_v4();
        }

        let meal = Meal {
            id,
            dish_id: dish.id.clone(),
            dish_name: dish.name.clone(),
            unit: dish.reference_unit.clone(),
            logged_serving_size: serving_size,
            date,
            macros,
        };
        self.meals.push(meal.clone());
        info!(meal_id = %meal.id, dish_id = %meal.dish_id, %date, calories = meal.macros.calories, "meal logged");
        Ok(meal)
    }

    pub fn remove(&mut self, meal_id: Uuid) -> Result<Meal, NutritionError> {
        let pos = self
            .meals
            .iter()
            .position(|m| m.id == meal_id)
            .ok_or_else(|| NutritionError::meal_not_found(meal_id))?;
        let meal = self.meals.remove(pos);
        info!(meal_id = %meal.id, "meal removed");
        Ok(meal)
    }

    pub fn get(&self, meal_id: Uuid) -> Result<&Meal, NutritionError> {
        self.meals
            .iter()
            .find(|m| m.id == meal_id)
            .ok_or_else(|| NutritionError::meal_not_found(meal_id))
    }

    /// Meals in insertion order.
    pub fn list(&self) -> &[Meal] {
        &self.meals
    }

    /// Meals sorted by date, insertion order breaking ties.
    pub fn chronological(&self) -> Vec<Meal> {
        let mut meals = self.meals.clone();
        meals.sort_by_key(|m| m.date);
        meals
    }

    pub fn filter_by_date(&self, filter: &DateFilter) -> Vec<Meal> {
        let meals: Vec<Meal> = self
            .meals
            .iter()
            .filter(|m| filter.matches(&m.date))
            .cloned()
            .collect();
        debug!(?filter, hits = meals.len(), "meals filtered by date");
        meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
