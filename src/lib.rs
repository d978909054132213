//! Fitness Diary (fitdiary) Library
//!
//! Core functionality for a single-user fitness diary: food and macro
//! aggregation, body metrics, date-keyed persistence, and weekly
//! reporting.

pub mod models;
pub mod nutrition;
pub mod report;
pub mod session;
pub mod store;
