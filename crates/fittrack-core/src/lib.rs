//! # Fittrack Core
//!
//! Core library for Fittrack - a local-first personal fitness logbook.
//!
//! This crate provides the domain logic and storage abstractions
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **schedule**: Rolling workout schedule generated from a repeating pattern
//! - **log**: Typed per-category append-only logs and their storage backends
//! - **summary**: Window aggregation across log categories
//! - **mealplan**: Static weekly meal plan, recipes, and shopping list
//! - **exercises**: Exercise descriptions for the movements in the pattern
//! - **reminder**: Daily reminder re-arm arithmetic

pub mod error;
pub mod exercises;
pub mod log;
pub mod mealplan;
pub mod reminder;
pub mod schedule;
pub mod summary;

pub use error::{FittrackError, Result};
pub use log::{CategoryLog, JsonFileStore, LogCategory, LogEntry, LogStore, MemoryStore};
pub use schedule::{Schedule, ScheduleEntry, WorkoutTemplate};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
