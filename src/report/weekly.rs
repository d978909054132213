//! Weekly aggregation
//!
//! Selects diary entries for a date range and projects them into the
//! row and series shapes consumed by the PDF and chart renderers.

use std::collections::BTreeMap;

use chrono::{Duration, Local};
use serde::Serialize;

use crate::models::DailyEntry;

/// Length of the default reporting window in calendar days
pub const TRAILING_WINDOW_DAYS: i64 = 7;

/// One summary table row. Weight and BMI stay None when the day has no
/// body data; a None is rendered as "-" downstream, never as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub weight: Option<f64>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub net_calories: f64,
    pub bmi: Option<f64>,
}

/// Metrics charted by the weekly report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Weight,
    TotalCalories,
    TotalProtein,
    NetCalories,
}

impl Metric {
    /// All metrics, in report order
    pub const ALL: [Metric; 4] = [
        Metric::Weight,
        Metric::TotalCalories,
        Metric::TotalProtein,
        Metric::NetCalories,
    ];

    /// Stable key used for file names and series identification
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::TotalCalories => "total_calories",
            Metric::TotalProtein => "total_protein",
            Metric::NetCalories => "net_calories",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight (kg) over Last 7 Days",
            Metric::TotalCalories => "Calories Intake over Last 7 Days",
            Metric::TotalProtein => "Protein Intake over Last 7 Days",
            Metric::NetCalories => "Net Calories over Last 7 Days",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight (kg)",
            Metric::TotalCalories => "Calories",
            Metric::TotalProtein => "Protein (g)",
            Metric::NetCalories => "Calories",
        }
    }
}

/// Entries between the two dates, inclusive on both ends, ascending by
/// date. Dates with no entry are simply absent.
pub fn select_range(
    store: &BTreeMap<String, DailyEntry>,
    start_date: &str,
    end_date: &str,
) -> Vec<DailyEntry> {
    if start_date > end_date {
        return Vec::new();
    }

    store
        .range::<str, _>((
            std::ops::Bound::Included(start_date),
            std::ops::Bound::Included(end_date),
        ))
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Project entries into summary table rows
pub fn summary_rows(entries: &[DailyEntry]) -> Vec<SummaryRow> {
    entries
        .iter()
        .map(|entry| SummaryRow {
            date: entry.date.clone(),
            weight: entry.weight,
            total_calories: entry.total_calories,
            total_protein: entry.total_protein,
            net_calories: entry.net_calories,
            bmi: entry.bmi,
        })
        .collect()
}

/// Time series for one metric, in entry order. A day with no value for
/// the metric yields None, preserving the gap in the trend line.
pub fn series_for(entries: &[DailyEntry], metric: Metric) -> Vec<(String, Option<f64>)> {
    entries
        .iter()
        .map(|entry| {
            let value = match metric {
                Metric::Weight => entry.weight,
                Metric::TotalCalories => Some(entry.total_calories),
                Metric::TotalProtein => Some(entry.total_protein),
                Metric::NetCalories => Some(entry.net_calories),
            };
            (entry.date.clone(), value)
        })
        .collect()
}

/// The trailing 7-day window ending today, inclusive, as
/// (start, end) ISO date strings. Computed from wall-clock now at call
/// time; not stored or configurable.
pub fn trailing_week() -> (String, String) {
    let today = Local::now().date_naive();
    let start = today - Duration::days(TRAILING_WINDOW_DAYS - 1);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BodyMetrics;

    fn store_with_dates(dates: &[&str]) -> BTreeMap<String, DailyEntry> {
        dates
            .iter()
            .map(|date| {
                let entry = DailyEntry::build(
                    date,
                    BTreeMap::new(),
                    Vec::new(),
                    None,
                    1200,
                    String::new(),
                );
                (date.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn test_select_range_inclusive_bounds() {
        let dates: Vec<String> = (1..=10).map(|d| format!("2024-01-{:02}", d)).collect();
        let refs: Vec<&str> = dates.iter().map(|d| d.as_str()).collect();
        let store = store_with_dates(&refs);

        let selected = select_range(&store, "2024-01-03", "2024-01-05");
        let selected_dates: Vec<&str> = selected.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(selected_dates, ["2024-01-03", "2024-01-04", "2024-01-05"]);
    }

    #[test]
    fn test_select_range_empty_cases() {
        let store = store_with_dates(&["2024-01-01"]);
        assert!(select_range(&store, "2024-02-01", "2024-02-07").is_empty());
        assert!(select_range(&store, "2024-01-05", "2024-01-01").is_empty());
        assert!(select_range(&BTreeMap::new(), "2024-01-01", "2024-01-07").is_empty());
    }

    #[test]
    fn test_summary_rows_keep_missing_values_distinct_from_zero() {
        let with_body = DailyEntry::build(
            "2024-01-01",
            BTreeMap::new(),
            Vec::new(),
            Some(BodyMetrics {
                weight: 70.0,
                height: 170.0,
                age: 30,
            }),
            0,
            String::new(),
        );
        let without_body = DailyEntry::build(
            "2024-01-02",
            BTreeMap::new(),
            Vec::new(),
            None,
            0,
            String::new(),
        );

        let rows = summary_rows(&[with_body, without_body]);
        assert_eq!(rows[0].weight, Some(70.0));
        assert_eq!(rows[0].bmi, Some(24.22));
        assert_eq!(rows[1].weight, None);
        assert_eq!(rows[1].bmi, None);
        assert_eq!(rows[1].total_calories, 0.0);
    }

    #[test]
    fn test_series_preserves_gaps() {
        let with_body = DailyEntry::build(
            "2024-01-01",
            BTreeMap::new(),
            Vec::new(),
            Some(BodyMetrics {
                weight: 70.0,
                height: 170.0,
                age: 30,
            }),
            0,
            String::new(),
        );
        let without_body = DailyEntry::build(
            "2024-01-02",
            BTreeMap::new(),
            Vec::new(),
            None,
            2400,
            String::new(),
        );
        let entries = [with_body, without_body];

        let weight = series_for(&entries, Metric::Weight);
        assert_eq!(weight[0], ("2024-01-01".to_string(), Some(70.0)));
        assert_eq!(weight[1], ("2024-01-02".to_string(), None));

        // Computed totals are always present, even when zero
        let net = series_for(&entries, Metric::NetCalories);
        assert_eq!(net[0].1, Some(0.0));
        assert_eq!(net[1].1, Some(-200.0));
    }

    #[test]
    fn test_trailing_week_spans_seven_days() {
        let (start, end) = trailing_week();
        let start_date = chrono::NaiveDate::parse_from_str(&start, "%Y-%m-%d").unwrap();
        let end_date = chrono::NaiveDate::parse_from_str(&end, "%Y-%m-%d").unwrap();
        assert_eq!((end_date - start_date).num_days(), TRAILING_WINDOW_DAYS - 1);
    }
}
