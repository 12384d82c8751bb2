//! Log store trait definition.
//!
//! The `LogStore` trait defines the interface that all log backends must
//! implement. This abstraction keeps the views and summaries independent of
//! where the logs live, and lets tests substitute an in-memory store.

use chrono::NaiveDate;

use super::types::{CategoryLog, LogCategory, LogEntry};
use crate::error::{FittrackError, Result};

/// Storage interface for the per-category append-only logs.
///
/// All implementations must ensure:
/// - `read` never fails on an untouched category; absence is an empty mapping
/// - `append` never overwrites or reorders existing entries for a date
/// - entries for a date accumulate strictly in append order
/// - an append is persisted before the call returns
pub trait LogStore {
    /// Read the full persisted mapping for a category.
    ///
    /// Returns an empty mapping when nothing has been logged yet - a valid,
    /// common state, not an error.
    fn read(&self, category: LogCategory) -> Result<CategoryLog>;

    /// Append one entry under `date` in the given category.
    ///
    /// Creates the per-date sequence lazily and appends at the end,
    /// preserving prior order. There is no update or delete; correcting a
    /// mistake means appending a new entry.
    ///
    /// # Errors
    ///
    /// Returns `FittrackError::Validation` if the entry's variant does not
    /// match `category` or its fields are out of range, and
    /// `FittrackError::Storage` if persisting fails.
    fn append(&mut self, category: LogCategory, date: NaiveDate, entry: LogEntry) -> Result<()>;
}

/// Shared guard used by the backends before any write.
pub(super) fn check_entry(category: LogCategory, entry: &LogEntry) -> Result<()> {
    if entry.category() != category {
        return Err(FittrackError::Validation(format!(
            "Cannot append a {} entry to the {} log",
            entry.category(),
            category
        )));
    }
    entry.validate()
}
