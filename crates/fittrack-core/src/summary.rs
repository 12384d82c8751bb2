//! Window aggregation across log categories.
//!
//! All helpers are pure functions over a category's mapping as returned by
//! `LogStore::read`. Averages divide by the number of days that have at
//! least one entry; days with nothing logged are excluded from the
//! denominator. A window with zero qualifying days yields zeros, never an
//! error.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::log::{BodyMeasurement, CategoryLog, LogEntry};

/// An inclusive span of calendar days ending at a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    end: NaiveDate,
    days: u32,
}

impl DayWindow {
    /// Window of `days` consecutive days ending at (and including) `end`.
    pub fn ending(end: NaiveDate, days: u32) -> Self {
        Self { end, days }
    }

    /// First day of the window, clamped at the calendar floor.
    pub fn start(&self) -> NaiveDate {
        if self.days == 0 {
            return self.end;
        }
        self.end
            .checked_sub_days(Days::new(u64::from(self.days) - 1))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    fn is_empty(&self) -> bool {
        self.days == 0
    }
}

/// Diet totals and per-day averages over a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DietSummary {
    /// Days in the window with at least one diet entry
    pub days_logged: u32,
    pub total_calories: u64,
    pub total_protein: u64,
    pub total_carbs: u64,
    pub total_fats: u64,
    pub total_water: f64,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_water: f64,
}

/// Summarize diet entries over the window.
pub fn diet_summary(log: &CategoryLog, window: DayWindow) -> DietSummary {
    let mut summary = DietSummary::default();
    if window.is_empty() {
        return summary;
    }

    for (_, entries) in log.range(window.start()..=window.end()) {
        if entries.is_empty() {
            continue;
        }
        summary.days_logged += 1;
        for entry in entries {
            if let LogEntry::Diet(item) = entry {
                summary.total_calories += u64::from(item.calories);
                summary.total_protein += u64::from(item.protein);
                summary.total_carbs += u64::from(item.carbs);
                summary.total_fats += u64::from(item.fats);
                summary.total_water += item.water;
            }
        }
    }

    if summary.days_logged > 0 {
        let days = f64::from(summary.days_logged);
        summary.avg_calories = summary.total_calories as f64 / days;
        summary.avg_protein = summary.total_protein as f64 / days;
        summary.avg_water = summary.total_water / days;
    }
    summary
}

/// Sleep averages over a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SleepSummary {
    /// Days in the window with at least one sleep entry
    pub days_logged: u32,
    pub avg_hours: f64,
    pub avg_quality: f64,
}

/// Summarize sleep entries over the window.
pub fn sleep_summary(log: &CategoryLog, window: DayWindow) -> SleepSummary {
    let mut summary = SleepSummary::default();
    if window.is_empty() {
        return summary;
    }

    let mut total_hours = 0.0;
    let mut total_quality = 0u64;
    let mut records = 0u64;
    for (_, entries) in log.range(window.start()..=window.end()) {
        if entries.is_empty() {
            continue;
        }
        summary.days_logged += 1;
        for entry in entries {
            if let LogEntry::Sleep(record) = entry {
                total_hours += record.hours;
                total_quality += u64::from(record.quality);
                records += 1;
            }
        }
    }

    if records > 0 {
        summary.avg_hours = total_hours / records as f64;
        summary.avg_quality = total_quality as f64 / records as f64;
    }
    summary
}

/// Workout volume over a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Days in the window with at least one workout entry
    pub days_trained: u32,
    /// Logged exercise entries
    pub exercises: u64,
    /// Total working sets across all entries
    pub total_sets: u64,
}

/// Summarize workout entries over the window.
pub fn workout_summary(log: &CategoryLog, window: DayWindow) -> WorkoutSummary {
    let mut summary = WorkoutSummary::default();
    if window.is_empty() {
        return summary;
    }

    for (_, entries) in log.range(window.start()..=window.end()) {
        if entries.is_empty() {
            continue;
        }
        summary.days_trained += 1;
        for entry in entries {
            if let LogEntry::Workout(set) = entry {
                summary.exercises += 1;
                summary.total_sets += u64::from(set.sets);
            }
        }
    }
    summary
}

/// Most recent date with at least one workout entry.
pub fn last_workout_date(log: &CategoryLog) -> Option<NaiveDate> {
    log.iter()
        .rev()
        .find(|(_, entries)| {
            entries
                .iter()
                .any(|entry| matches!(entry, LogEntry::Workout(_)))
        })
        .map(|(date, _)| *date)
}

/// Earliest body measurement: first date key, first entry on that date.
pub fn first_measurement(log: &CategoryLog) -> Option<(NaiveDate, &BodyMeasurement)> {
    log.iter().find_map(|(date, entries)| {
        entries.iter().find_map(|entry| match entry {
            LogEntry::Body(measurement) => Some((*date, measurement)),
            _ => None,
        })
    })
}

/// Latest body measurement: last date key, last entry on that date.
pub fn latest_measurement(log: &CategoryLog) -> Option<(NaiveDate, &BodyMeasurement)> {
    log.iter().rev().find_map(|(date, entries)| {
        entries.iter().rev().find_map(|entry| match entry {
            LogEntry::Body(measurement) => Some((*date, measurement)),
            _ => None,
        })
    })
}

/// Render the weight change between the earliest and latest measurement,
/// e.g. `90.0 kg → 87.5 kg (-2.5 kg)`. `None` if nothing is logged.
pub fn weight_change(log: &CategoryLog) -> Option<String> {
    let (_, first) = first_measurement(log)?;
    let (_, last) = latest_measurement(log)?;
    Some(format!(
        "{:.1} kg \u{2192} {:.1} kg ({:+.1} kg)",
        first.weight,
        last.weight,
        last.weight - first.weight
    ))
}
