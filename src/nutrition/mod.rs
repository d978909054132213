//! Nutrition and body-metric calculators
//!
//! Pure functions over the fixed reference table. No I/O and no error
//! conditions; missing or unknown inputs degrade to zeros or None.

pub mod body;
pub mod foods;
pub mod intake;

pub use body::{compute_bmi, steps_to_miles_calories};
pub use foods::{find_food, FoodSpec, FoodUnit, REFERENCE_FOODS};
pub use intake::compute_macros;

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
