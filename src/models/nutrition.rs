//! Shared macro-total data structure
//!
//! Used for food aggregation and daily entry totals.

use serde::{Deserialize, Serialize};

/// Aggregate macro-nutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl MacroTotals {
    /// Create a new MacroTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale totals by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &MacroTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for MacroTotals {
    type Output = MacroTotals;

    fn mul(self, multiplier: f64) -> MacroTotals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let base = MacroTotals {
            calories: 170.0,
            protein: 10.0,
            carbs: 28.0,
            fat: 0.0,
        };

        let doubled = base.scale(2.0);
        assert!((doubled.calories - 340.0).abs() < 0.001);
        assert!((doubled.protein - 20.0).abs() < 0.001);

        let sum = base + doubled;
        assert!((sum.calories - 510.0).abs() < 0.001);
        assert!((sum.carbs - 84.0).abs() < 0.001);
    }

    #[test]
    fn test_sum_over_empty_iter_is_zero() {
        let total: MacroTotals = std::iter::empty().sum();
        assert_eq!(total, MacroTotals::zero());
    }
}
