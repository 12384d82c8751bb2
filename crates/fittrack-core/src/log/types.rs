//! Typed log records, one fixed field set per category.
//!
//! Each category is a statically-typed record and the four categories form
//! a tagged variant, so a diet field can never leak into a sleep entry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FittrackError, Result};

/// The four independent logging domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogCategory {
    Workout,
    Diet,
    BodyMeasurement,
    Sleep,
}

impl LogCategory {
    /// All categories, in display order.
    pub const ALL: [LogCategory; 4] = [
        LogCategory::Workout,
        LogCategory::Diet,
        LogCategory::BodyMeasurement,
        LogCategory::Sleep,
    ];

    /// User-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Workout => "workout",
            LogCategory::Diet => "diet",
            LogCategory::BodyMeasurement => "body-measurement",
            LogCategory::Sleep => "sleep",
        }
    }

    /// Stable storage key for this category's persisted mapping.
    pub fn storage_key(&self) -> &'static str {
        match self {
            LogCategory::Workout => "workout_logs",
            LogCategory::Diet => "diet_logs",
            LogCategory::BodyMeasurement => "body_logs",
            LogCategory::Sleep => "sleep_logs",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogCategory {
    type Err = FittrackError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "workout" => Ok(LogCategory::Workout),
            "diet" => Ok(LogCategory::Diet),
            "body" | "body-measurement" => Ok(LogCategory::BodyMeasurement),
            "sleep" => Ok(LogCategory::Sleep),
            other => Err(FittrackError::InvalidInput(format!(
                "Unknown log category: {} (use workout, diet, body, or sleep)",
                other
            ))),
        }
    }
}

/// Meal slot for a diet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snack => "Snack",
        };
        f.write_str(name)
    }
}

impl FromStr for Meal {
    type Err = FittrackError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            "snack" => Ok(Meal::Snack),
            other => Err(FittrackError::InvalidInput(format!(
                "Unknown meal: {} (use breakfast, lunch, dinner, or snack)",
                other
            ))),
        }
    }
}

/// One logged set of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    /// Weight in kg
    pub weight: f64,
    /// Rate of perceived exertion, 1-10
    pub rpe: u32,
    #[serde(default)]
    pub notes: String,
}

/// One logged meal item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietItem {
    pub meal: Meal,
    pub food: String,
    pub calories: u32,
    /// Grams
    pub protein: u32,
    /// Grams
    pub carbs: u32,
    /// Grams
    pub fats: u32,
    /// Litres
    pub water: f64,
}

/// One body-composition measurement (smart-scale reading).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Kilograms
    pub weight: f64,
    /// Percent, 0-100
    pub body_fat: f64,
    /// Kilograms
    pub muscle_mass: f64,
    pub visceral_fat: f64,
    pub metabolic_age: f64,
}

/// One night of sleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub hours: f64,
    /// Subjective quality, 1-10
    pub quality: u32,
    #[serde(default)]
    pub notes: String,
}

/// A log entry, tagged by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum LogEntry {
    Workout(WorkoutSet),
    Diet(DietItem),
    #[serde(rename = "body-measurement")]
    Body(BodyMeasurement),
    Sleep(SleepRecord),
}

impl LogEntry {
    /// The category this entry belongs to.
    pub fn category(&self) -> LogCategory {
        match self {
            LogEntry::Workout(_) => LogCategory::Workout,
            LogEntry::Diet(_) => LogCategory::Diet,
            LogEntry::Body(_) => LogCategory::BodyMeasurement,
            LogEntry::Sleep(_) => LogCategory::Sleep,
        }
    }

    /// Validate field ranges.
    ///
    /// Invalid values are rejected at entry time rather than coerced.
    pub fn validate(&self) -> Result<()> {
        match self {
            LogEntry::Workout(set) => {
                if set.exercise.trim().is_empty() {
                    return Err(validation("Exercise name must not be empty"));
                }
                if set.sets < 1 {
                    return Err(validation("Sets must be at least 1"));
                }
                if set.reps < 1 {
                    return Err(validation("Reps must be at least 1"));
                }
                if !non_negative(set.weight) {
                    return Err(validation("Weight must be a non-negative number"));
                }
                if !(1..=10).contains(&set.rpe) {
                    return Err(validation("RPE must be between 1 and 10"));
                }
            }
            LogEntry::Diet(item) => {
                if item.food.trim().is_empty() {
                    return Err(validation("Food item must not be empty"));
                }
                if !non_negative(item.water) {
                    return Err(validation("Water intake must be a non-negative number"));
                }
            }
            LogEntry::Body(measurement) => {
                for (name, value) in [
                    ("Weight", measurement.weight),
                    ("Muscle mass", measurement.muscle_mass),
                    ("Visceral fat", measurement.visceral_fat),
                    ("Metabolic age", measurement.metabolic_age),
                ] {
                    if !non_negative(value) {
                        return Err(validation(&format!(
                            "{} must be a non-negative number",
                            name
                        )));
                    }
                }
                if !(0.0..=100.0).contains(&measurement.body_fat) {
                    return Err(validation("Body fat % must be between 0 and 100"));
                }
            }
            LogEntry::Sleep(record) => {
                if !non_negative(record.hours) {
                    return Err(validation("Hours slept must be a non-negative number"));
                }
                if !(1..=10).contains(&record.quality) {
                    return Err(validation("Sleep quality must be between 1 and 10"));
                }
            }
        }
        Ok(())
    }
}

// NaN compares false against everything, so it fails this check too.
fn non_negative(value: f64) -> bool {
    value >= 0.0
}

fn validation(message: &str) -> FittrackError {
    FittrackError::Validation(message.to_string())
}

/// Persisted mapping for one category: calendar date to its ordered
/// sequence of entries. ISO date keys in the serialized form sort the same
/// way the calendar does.
pub type CategoryLog = BTreeMap<NaiveDate, Vec<LogEntry>>;
