//! Per-category append-only logs.
//!
//! Each log category (workout, diet, body-measurement, sleep) owns an
//! independent mapping from calendar date to an ordered sequence of entries.
//! Entries accumulate strictly in append order; there is no update or delete
//! operation.

mod json_file;
mod memory;
mod store;
mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::LogStore;
pub use types::{
    BodyMeasurement, CategoryLog, DietItem, LogCategory, LogEntry, Meal, SleepRecord, WorkoutSet,
};
