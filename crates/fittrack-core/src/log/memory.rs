//! In-memory log backend for tests and embedding.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::store::{check_entry, LogStore};
use super::types::{CategoryLog, LogCategory, LogEntry};
use crate::error::Result;

/// Log store holding everything in memory. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    logs: HashMap<LogCategory, CategoryLog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for MemoryStore {
    fn read(&self, category: LogCategory) -> Result<CategoryLog> {
        Ok(self.logs.get(&category).cloned().unwrap_or_default())
    }

    fn append(&mut self, category: LogCategory, date: NaiveDate, entry: LogEntry) -> Result<()> {
        check_entry(category, &entry)?;
        self.logs
            .entry(category)
            .or_default()
            .entry(date)
            .or_default()
            .push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::types::{SleepRecord, WorkoutSet};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn set(exercise: &str) -> LogEntry {
        LogEntry::Workout(WorkoutSet {
            exercise: exercise.to_string(),
            sets: 3,
            reps: 10,
            weight: 60.0,
            rpe: 7,
            notes: String::new(),
        })
    }

    #[test]
    fn test_read_untouched_category_is_empty() {
        let store = MemoryStore::new();
        let log = store.read(LogCategory::Diet).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = MemoryStore::new();
        let day = date("2025-08-16");
        store
            .append(LogCategory::Workout, day, set("Bench Press"))
            .unwrap();
        store
            .append(LogCategory::Workout, day, set("Incline Dumbbell Press"))
            .unwrap();

        let log = store.read(LogCategory::Workout).unwrap();
        let entries = &log[&day];
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], set("Bench Press"));
        assert_eq!(entries[1], set("Incline Dumbbell Press"));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut store = MemoryStore::new();
        let day = date("2025-08-16");
        store
            .append(
                LogCategory::Sleep,
                day,
                LogEntry::Sleep(SleepRecord {
                    hours: 7.5,
                    quality: 8,
                    notes: String::new(),
                }),
            )
            .unwrap();

        assert!(store.read(LogCategory::Workout).unwrap().is_empty());
        assert_eq!(store.read(LogCategory::Sleep).unwrap()[&day].len(), 1);
    }

    #[test]
    fn test_append_rejects_mismatched_entry() {
        let mut store = MemoryStore::new();
        let result = store.append(LogCategory::Diet, date("2025-08-16"), set("Bench Press"));
        assert!(result.is_err());
        assert!(store.read(LogCategory::Diet).unwrap().is_empty());
    }
}
