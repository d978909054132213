//! Store module
//!
//! Flat-file JSON persistence for the diary.

pub mod json;

pub use json::{DiaryStore, StoreError, StoreResult, DEFAULT_STORE_FILE};
