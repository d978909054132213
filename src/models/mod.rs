//! Data models
//!
//! Rust structs representing diary records and derived totals.

mod entry;
mod nutrition;

pub use entry::{BodyMetrics, DailyEntry, ExtraFoodItem};
pub use nutrition::MacroTotals;
