//! Food intake aggregation
//!
//! Turns a day's food-quantity map into macro totals using the fixed
//! reference table.

use std::collections::BTreeMap;

use crate::models::MacroTotals;

use super::foods::{find_food, FoodUnit};

/// Compute aggregate macros from a map of food name to quantity.
///
/// Quantities are grams for mass-based foods and item counts for
/// count-based foods. Zero quantities and names missing from the
/// reference table contribute nothing; they are skipped, not errors.
pub fn compute_macros(food: &BTreeMap<String, f64>) -> MacroTotals {
    let mut total = MacroTotals::zero();

    for (name, &qty) in food {
        if qty == 0.0 {
            continue;
        }

        let Some(spec) = find_food(name) else {
            tracing::debug!("skipping unknown food '{}'", name);
            continue;
        };

        match spec.unit {
            FoodUnit::Mass { base_grams } => {
                let ratio = qty / base_grams;
                total.calories += spec.calories * ratio;
                total.protein += spec.protein * ratio;
                total.carbs += spec.carbs * ratio;
                total.fat += spec.fat * ratio;
            }
            FoodUnit::Count => {
                // Count-based foods contribute calories and protein only
                total.calories += spec.calories * qty;
                total.protein += spec.protein * qty;
            }
        }
    }

    total
}
