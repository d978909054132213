//! Daily entry model
//!
//! One persisted record per calendar date, combining food intake, body
//! metrics, steps, and notes with their derived totals. Derived fields
//! are always recomputed in full from the raw fields; they are never
//! updated incrementally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nutrition::{compute_bmi, compute_macros, round_to, steps_to_miles_calories};

/// Body measurements entered for a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight: f64, // kg
    pub height: f64, // cm
    pub age: u32,    // years
}

/// A free-form food outside the fixed menu, with manually entered figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraFoodItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
}

/// One day of the diary, keyed by its ISO date.
///
/// Weight, height, age, and BMI are optional so that "never entered"
/// survives a round-trip distinct from an entered zero. The serialized
/// shape matches stores written by earlier versions of the diary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String, // ISO date: "2025-01-09"
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub bmi: Option<f64>,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub workout_notes: String,
    #[serde(default)]
    pub food: BTreeMap<String, f64>,
    #[serde(default)]
    pub extra_food: Vec<ExtraFoodItem>,
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub miles_walked: f64,
    #[serde(default)]
    pub calories_burned: f64,
    #[serde(default)]
    pub net_calories: f64,
}

impl DailyEntry {
    /// Build a complete entry from raw inputs.
    ///
    /// Pure function of its arguments: identical inputs always yield an
    /// identical entry. Quantities are taken as given; input validation
    /// belongs to the presentation layer. The caller is responsible for
    /// writing the result into the diary under `date`.
    pub fn build(
        date: &str,
        food: BTreeMap<String, f64>,
        extra_food: Vec<ExtraFoodItem>,
        body: Option<BodyMetrics>,
        steps: u32,
        workout_notes: String,
    ) -> Self {
        let macros = compute_macros(&food);

        let extra_calories: f64 = extra_food.iter().map(|item| item.calories).sum();
        let extra_protein: f64 = extra_food.iter().map(|item| item.protein).sum();

        let total_calories = round_to(macros.calories + extra_calories, 1);
        let total_protein = round_to(macros.protein + extra_protein, 1);

        let (miles_walked, calories_burned) = steps_to_miles_calories(steps);
        let net_calories = round_to(total_calories - calories_burned, 1);

        let bmi = body.as_ref().and_then(|b| compute_bmi(b.weight, b.height));

        Self {
            date: date.to_string(),
            weight: body.as_ref().map(|b| b.weight),
            height: body.as_ref().map(|b| b.height),
            age: body.as_ref().map(|b| b.age),
            bmi,
            steps,
            workout_notes,
            food,
            extra_food,
            total_calories,
            total_protein,
            miles_walked,
            calories_burned,
            net_calories,
        }
    }

    /// Recompute every derived field from this entry's raw fields.
    ///
    /// Raw fields pass through untouched. Used after reference-table
    /// edits to bring stored totals back in line.
    pub fn recalculate(&self) -> Self {
        let macros = compute_macros(&self.food);

        let extra_calories: f64 = self.extra_food.iter().map(|item| item.calories).sum();
        let extra_protein: f64 = self.extra_food.iter().map(|item| item.protein).sum();

        let total_calories = round_to(macros.calories + extra_calories, 1);
        let total_protein = round_to(macros.protein + extra_protein, 1);

        let (miles_walked, calories_burned) = steps_to_miles_calories(self.steps);
        let net_calories = round_to(total_calories - calories_burned, 1);

        let bmi = match (self.weight, self.height) {
            (Some(weight), Some(height)) => compute_bmi(weight, height),
            _ => None,
        };

        Self {
            bmi,
            total_calories,
            total_protein,
            miles_walked,
            calories_burned,
            net_calories,
            ..self.clone()
        }
    }

    /// Body metrics for this entry, when all three were recorded
    pub fn body_metrics(&self) -> Option<BodyMetrics> {
        match (self.weight, self.height, self.age) {
            (Some(weight), Some(height), Some(age)) => Some(BodyMetrics { weight, height, age }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_map(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    }

    fn sample_body() -> BodyMetrics {
        BodyMetrics {
            weight: 70.0,
            height: 170.0,
            age: 30,
        }
    }

    #[test]
    fn test_build_end_to_end() {
        // 90g Oats (2x base) and 2400 steps
        let entry = DailyEntry::build(
            "2024-01-03",
            food_map(&[("Oats", 90.0)]),
            Vec::new(),
            Some(sample_body()),
            2400,
            String::new(),
        );

        assert_eq!(entry.total_calories, 340.0);
        assert_eq!(entry.total_protein, 20.0);
        assert_eq!(entry.miles_walked, 2.0);
        assert_eq!(entry.calories_burned, 200.0);
        assert_eq!(entry.net_calories, 140.0);
        assert_eq!(entry.bmi, Some(24.22));
        assert_eq!(entry.weight, Some(70.0));
        assert_eq!(entry.age, Some(30));
    }

    #[test]
    fn test_build_is_idempotent() {
        let make = || {
            DailyEntry::build(
                "2024-01-03",
                food_map(&[("Oats", 45.0), ("Tomato", 2.0)]),
                vec![ExtraFoodItem {
                    name: "Banana".to_string(),
                    calories: 105.0,
                    protein: 1.3,
                }],
                Some(sample_body()),
                3100,
                "Push day".to_string(),
            )
        };

        assert_eq!(make(), make());
    }

    #[test]
    fn test_extra_foods_add_to_totals() {
        let entry = DailyEntry::build(
            "2024-01-04",
            food_map(&[("Oats", 45.0)]),
            vec![
                ExtraFoodItem {
                    name: "Banana".to_string(),
                    calories: 105.0,
                    protein: 1.3,
                },
                ExtraFoodItem {
                    name: String::new(),
                    calories: 50.0,
                    protein: 0.0,
                },
            ],
            None,
            0,
            String::new(),
        );

        assert_eq!(entry.total_calories, 325.0);
        assert_eq!(entry.total_protein, 11.3);
        assert_eq!(entry.net_calories, 325.0);
    }

    #[test]
    fn test_build_without_body_metrics() {
        let entry = DailyEntry::build(
            "2024-01-05",
            BTreeMap::new(),
            Vec::new(),
            None,
            0,
            String::new(),
        );

        assert_eq!(entry.weight, None);
        assert_eq!(entry.height, None);
        assert_eq!(entry.age, None);
        assert_eq!(entry.bmi, None);
        assert_eq!(entry.total_calories, 0.0);
        assert!(entry.body_metrics().is_none());
    }

    #[test]
    fn test_recalculate_refreshes_derived_fields() {
        let mut entry = DailyEntry::build(
            "2024-01-06",
            food_map(&[("Oats", 90.0)]),
            Vec::new(),
            Some(sample_body()),
            2400,
            "Rest day".to_string(),
        );

        // Simulate stale derived values from an older table
        entry.total_calories = 999.0;
        entry.net_calories = 999.0;
        entry.bmi = None;

        let rebuilt = entry.recalculate();
        assert_eq!(rebuilt.total_calories, 340.0);
        assert_eq!(rebuilt.net_calories, 140.0);
        assert_eq!(rebuilt.bmi, Some(24.22));

        // Raw fields survive untouched
        assert_eq!(rebuilt.date, "2024-01-06");
        assert_eq!(rebuilt.steps, 2400);
        assert_eq!(rebuilt.workout_notes, "Rest day");
        assert_eq!(rebuilt.food, entry.food);
    }

    #[test]
    fn test_serialized_shape_is_store_compatible() {
        let entry = DailyEntry::build(
            "2024-01-07",
            food_map(&[("Oats", 45.0)]),
            Vec::new(),
            Some(sample_body()),
            1200,
            String::new(),
        );

        let value = serde_json::to_value(&entry).unwrap();
        for key in [
            "date",
            "weight",
            "height",
            "age",
            "bmi",
            "steps",
            "workout_notes",
            "food",
            "extra_food",
            "total_calories",
            "total_protein",
            "miles_walked",
            "calories_burned",
            "net_calories",
        ] {
            assert!(value.get(key).is_some(), "missing field {}", key);
        }
    }
}
