//! Fixed food reference table
//!
//! The diary tracks a fixed menu. Mass-based foods carry nutrition figures
//! normalized to a base gram quantity; count-based foods carry flat
//! per-unit figures.

/// How a food's quantity is entered and its nutrition scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodUnit {
    /// Grams; nutrition figures apply to `base_grams` of the food
    Mass { base_grams: f64 },
    /// Discrete units; nutrition figures apply per single item
    Count,
}

/// A reference food with nutrition at its base quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSpec {
    pub name: &'static str,
    pub unit: FoodUnit,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// The fixed food menu. Names and figures must not change without a
/// corresponding `recalculate_entries` run over the stored diary.
pub const REFERENCE_FOODS: &[FoodSpec] = &[
    // Meal 1
    FoodSpec { name: "Oats", unit: FoodUnit::Mass { base_grams: 45.0 }, calories: 170.0, protein: 10.0, carbs: 28.0, fat: 0.0 },
    FoodSpec { name: "Whey Protein", unit: FoodUnit::Mass { base_grams: 34.0 }, calories: 120.0, protein: 25.0, carbs: 2.5, fat: 0.0 },
    FoodSpec { name: "Skim Milk Powder", unit: FoodUnit::Mass { base_grams: 40.0 }, calories: 160.0, protein: 16.0, carbs: 18.0, fat: 0.0 },
    FoodSpec { name: "PB Powder", unit: FoodUnit::Mass { base_grams: 16.0 }, calories: 80.0, protein: 7.0, carbs: 6.2, fat: 0.0 },
    FoodSpec { name: "Nuts", unit: FoodUnit::Mass { base_grams: 15.0 }, calories: 95.0, protein: 2.0, carbs: 4.0, fat: 9.0 },
    // Meal 2
    FoodSpec { name: "White Rice", unit: FoodUnit::Mass { base_grams: 150.0 }, calories: 210.0, protein: 5.0, carbs: 72.0, fat: 0.5 },
    FoodSpec { name: "Tomato", unit: FoodUnit::Count, calories: 20.0, protein: 0.0, carbs: 0.0, fat: 0.0 },
    FoodSpec { name: "Onion", unit: FoodUnit::Count, calories: 35.0, protein: 0.0, carbs: 0.0, fat: 0.0 },
    FoodSpec { name: "Yogurt", unit: FoodUnit::Mass { base_grams: 170.0 }, calories: 90.0, protein: 18.0, carbs: 7.0, fat: 0.0 },
    FoodSpec { name: "Tortilla", unit: FoodUnit::Count, calories: 70.0, protein: 5.0, carbs: 12.0, fat: 2.0 },
    FoodSpec { name: "Soya Chunks", unit: FoodUnit::Mass { base_grams: 30.0 }, calories: 140.0, protein: 30.0, carbs: 6.0, fat: 1.0 },
    // Meal 3
    FoodSpec { name: "Whey Protein Shake", unit: FoodUnit::Mass { base_grams: 34.0 }, calories: 120.0, protein: 25.0, carbs: 2.0, fat: 0.0 },
];

/// Look up a food by its exact name
pub fn find_food(name: &str) -> Option<&'static FoodSpec> {
    REFERENCE_FOODS.iter().find(|f| f.name == name)
}
