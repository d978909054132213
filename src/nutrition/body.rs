//! Body metrics calculations
//!
//! BMI and step-based activity conversions.

use super::round_to;

/// Steps per mile walked
pub const STEPS_PER_MILE: f64 = 1200.0;

/// Calories burned per mile walked
pub const CALORIES_PER_MILE: f64 = 100.0;

/// Compute BMI from weight in kg and height in cm, to 2 decimal places.
///
/// Non-positive weight or height yields None rather than an error; the
/// diary treats missing body data as a normal condition.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round_to(weight_kg / (height_m * height_m), 2))
}

/// Convert steps walked to (miles, calories burned).
///
/// Miles are rounded to 2 decimals before the calorie multiply so the
/// figures match entries written by earlier versions of the diary.
pub fn steps_to_miles_calories(steps: u32) -> (f64, f64) {
    let miles = round_to(steps as f64 / STEPS_PER_MILE, 2);
    let calories_burned = round_to(miles * CALORIES_PER_MILE, 1);
    (miles, calories_burned)
}
