use crate::dishes::Dish;
use crate::error::NutritionError;
use crate::nutrients::Macros;

/// Scales a dish's reference macros linearly to `serving_size` (same unit as the dish).
///
/// Calories are rounded to a whole number, protein/carbs/fat to one decimal.
pub fn scale(dish: &Dish, serving_size: f64) -> Result<Macros, NutritionError> {
    if !serving_size.is_finite() || serving_size <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "serving size must be positive, got {serving_size}"
        )));
    }
    if !dish.reference_serving_size.is_finite() || dish.reference_serving_size <= 0.0 {
        return Err(NutritionError::DataIntegrity(format!(
            "dish {} has non-positive reference serving size",
            dish.id
        )));
    }

    let multiplier = serving_size / dish.reference_serving_size;
    Ok(dish.macros().map(|v| v * multiplier).rounded())
}
