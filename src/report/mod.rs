//! Weekly reporting
//!
//! Range selection and projections, chart rendering, and the PDF
//! summary document.

pub mod charts;
pub mod pdf;
pub mod weekly;

pub use pdf::{generate_weekly_report, WeeklyReport};
pub use weekly::{
    select_range, series_for, summary_rows, trailing_week, Metric, SummaryRow,
    TRAILING_WINDOW_DAYS,
};
