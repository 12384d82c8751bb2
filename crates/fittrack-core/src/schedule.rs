//! Rolling workout schedule generation.
//!
//! A short repeating pattern of workout-day templates is projected onto
//! calendar dates: day offset `i` from the anchor date is assigned template
//! `i % pattern.len()`. The whole schedule is materialized once at startup
//! and held read-only afterwards.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FittrackError, Result};

/// Anchor date of the built-in program.
pub const DEFAULT_ANCHOR: &str = "2025-08-16";

/// Number of days generated by default (approx one year).
pub const DEFAULT_DAYS: usize = 365;

/// One workout-day template from the repeating pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Category label (e.g., "Push (Chest/Shoulders/Triceps)")
    pub workout_type: String,

    /// Primary exercises
    pub main_lifts: String,

    /// Accessory exercises
    pub accessory: String,

    /// Core block
    pub abs_block: String,

    /// Rehabilitation notes
    pub rehab: String,

    /// Conditioning notes
    pub conditioning: String,
}

impl WorkoutTemplate {
    fn new(
        workout_type: &str,
        main_lifts: &str,
        accessory: &str,
        abs_block: &str,
        rehab: &str,
        conditioning: &str,
    ) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            main_lifts: main_lifts.to_string(),
            accessory: accessory.to_string(),
            abs_block: abs_block.to_string(),
            rehab: rehab.to_string(),
            conditioning: conditioning.to_string(),
        }
    }
}

/// The built-in 7-day training pattern.
pub fn default_pattern() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::new(
            "Push (Chest/Shoulders/Triceps)",
            "Bench Press 4x6-8; Incline Dumbbell Press 3x8-10; Overhead Shoulder Press 4x8-10",
            "Lateral Raises 3x15; Rope Pushdowns 3x12-15",
            "Lower Abs: Hanging Knee Raises 3x12-15; Ab Rollouts 3x10-12",
            "Calf isometric holds; Glute bridges for lower back",
            "Bike/Row HIIT 10 min",
        ),
        WorkoutTemplate::new(
            "Pull (Back/Biceps)",
            "Lat Pulldown 4x8-10; Seated Cable Row 4x10; Face Pulls 3x15",
            "Dumbbell Curls 3x12; Hammer Curls 3x12",
            "Upper Abs: Cable Crunch 4x15; Decline Sit-ups 3x12",
            "Eccentric calf drops; Bird dog for lower back",
            "Rowing Machine 10 min",
        ),
        WorkoutTemplate::new(
            "Legs (Lower Body)",
            "Leg Press 4x10; Bulgarian Split Squats 3x12; Romanian Deadlift 3x12",
            "Hip Thrusts 3x12; Seated Calf Raises (light) 3x15",
            "Obliques: Side Plank Hip Dips 3x12/side; Russian Twists 3x20",
            "Calf isometric holds; Glute bridges and hamstring stretches",
            "Elliptical LISS 20 min",
        ),
        WorkoutTemplate::new(
            "Core & Conditioning",
            "Core circuits: Plank Variations 3x45s; Ab Wheel Rollouts 3x10; Russian Twists 3x20",
            "",
            "Stability: Pallof Press 3x12; Bird Dog 3x12/side",
            "Achilles mobility drill; McGill Big 3 (Curl-up, Side Plank, Bird Dog)",
            "HIIT (Bike/Row) 20 min",
        ),
        WorkoutTemplate::new(
            "Push Variation (Chest/Shoulders/Triceps)",
            "Incline Dumbbell Press 3x8; Arnold Press 3x10; Dips 3x12",
            "Dumbbell Flyes 3x12-15; Overhead Tricep Extension 3x12",
            "Stability: Plank 3x60s; Pallof Press 3x12",
            "Calf eccentric drops; Hip mobility",
            "Bike HIIT 15 min",
        ),
        WorkoutTemplate::new(
            "Pull Variation (Back/Biceps)",
            "Chin-Ups 4x8; T-Bar Row 4x8; Shrugs 3x12-15",
            "Lat Pulldown 4x10; Concentration Curls 3x12",
            "Lower Abs: Lying Leg Raises 4x15; Reverse Crunches 3x12",
            "Calf isometrics; Glute bridge march",
            "Rowing HIIT 15 min",
        ),
        WorkoutTemplate::new(
            "Active Recovery / Rest",
            "",
            "Light stretching and mobility",
            "Recovery Core: Dead Bugs 3x15; Side Plank Holds 3x30s",
            "Calf mobility; Light foam rolling for back",
            "Walk/Swim/Light Cycle 20-30 min",
        ),
    ]
}

/// One calendar-dated day of the generated schedule.
///
/// Entries are never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Calendar date (ISO form when serialized)
    pub date: NaiveDate,

    /// Weekday name derived from the date (e.g., "Saturday")
    pub day_name: String,

    /// Category label copied from the assigned template
    pub workout_type: String,

    /// Primary exercises
    pub main_lifts: String,

    /// Accessory exercises
    pub accessory: String,

    /// Core block
    pub abs_block: String,

    /// Rehabilitation notes
    pub rehab: String,

    /// Conditioning notes
    pub conditioning: String,
}

/// A fully-materialized, read-only workout schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Generate a schedule of `day_count` consecutive days starting at `anchor`.
    ///
    /// Day offset `i` receives calendar date `anchor + i` and the template at
    /// index `i % pattern.len()`. Pure function over its inputs.
    ///
    /// # Errors
    ///
    /// Returns `FittrackError::InvalidInput` if `pattern` is empty (a fatal
    /// configuration error, not a runtime condition) or if the requested span
    /// runs past the supported calendar range.
    pub fn generate(
        anchor: NaiveDate,
        pattern: &[WorkoutTemplate],
        day_count: usize,
    ) -> Result<Self> {
        if pattern.is_empty() {
            return Err(FittrackError::InvalidInput(
                "Workout pattern table must not be empty".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(day_count);
        for i in 0..day_count {
            let date = anchor.checked_add_days(Days::new(i as u64)).ok_or_else(|| {
                FittrackError::InvalidInput(format!(
                    "Schedule day {} is outside the supported calendar range",
                    i
                ))
            })?;
            let template = &pattern[i % pattern.len()];
            entries.push(ScheduleEntry {
                date,
                day_name: date.format("%A").to_string(),
                workout_type: template.workout_type.clone(),
                main_lifts: template.main_lifts.clone(),
                accessory: template.accessory.clone(),
                abs_block: template.abs_block.clone(),
                rehab: template.rehab.clone(),
                conditioning: template.conditioning.clone(),
            });
        }

        Ok(Self { entries })
    }

    /// Generate the built-in program (default anchor, pattern, and length).
    pub fn default_program() -> Result<Self> {
        let anchor = NaiveDate::parse_from_str(DEFAULT_ANCHOR, "%Y-%m-%d")
            .map_err(|e| FittrackError::InvalidInput(format!("Invalid anchor date: {}", e)))?;
        Self::generate(anchor, &default_pattern(), DEFAULT_DAYS)
    }

    /// All generated entries in date order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Look up the entry for an exact calendar date.
    pub fn for_date(&self, date: NaiveDate) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Earliest date covered by the schedule.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|entry| entry.date)
    }

    /// Latest date covered by the schedule.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|entry| entry.date)
    }

    /// Whether `date` falls within the generated range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => date >= first && date <= last,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
    }

    #[test]
    fn test_generate_produces_exact_day_count() {
        let schedule = Schedule::generate(anchor(), &default_pattern(), 365).unwrap();
        assert_eq!(schedule.entries().len(), 365);
    }

    #[test]
    fn test_dates_strictly_increase_by_one_day() {
        let schedule = Schedule::generate(anchor(), &default_pattern(), 60).unwrap();
        for pair in schedule.entries().windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_template_index_cycles_with_pattern_length() {
        let pattern = default_pattern();
        let schedule = Schedule::generate(anchor(), &pattern, 371).unwrap();
        let entries = schedule.entries();

        assert!(entries[0].workout_type.starts_with("Push ("));
        assert!(entries[7].workout_type.starts_with("Push ("));
        assert!(entries[5].workout_type.starts_with("Pull Variation"));
        assert!(entries[369].workout_type.starts_with("Pull Variation"));
        assert_eq!(
            entries[370].workout_type,
            pattern[370 % pattern.len()].workout_type
        );
    }

    #[test]
    fn test_weekday_name_matches_date() {
        let schedule = Schedule::generate(anchor(), &default_pattern(), 3).unwrap();
        // 2025-08-16 is a Saturday
        assert_eq!(schedule.entries()[0].day_name, "Saturday");
        assert_eq!(schedule.entries()[1].day_name, "Sunday");
        assert_eq!(schedule.entries()[2].day_name, "Monday");
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let result = Schedule::generate(anchor(), &[], 10);
        assert!(matches!(result, Err(FittrackError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_day_count_yields_empty_schedule() {
        let schedule = Schedule::generate(anchor(), &default_pattern(), 0).unwrap();
        assert!(schedule.entries().is_empty());
        assert_eq!(schedule.first_date(), None);
        assert!(!schedule.contains(anchor()));
    }

    #[test]
    fn test_for_date_lookup_and_bounds() {
        let schedule = Schedule::generate(anchor(), &default_pattern(), 365).unwrap();
        let entry = schedule.for_date(anchor()).expect("anchor day present");
        assert_eq!(entry.date, anchor());

        assert_eq!(schedule.first_date(), Some(anchor()));
        let last = schedule.last_date().unwrap();
        assert_eq!(last, anchor().checked_add_days(Days::new(364)).unwrap());
        assert!(schedule.contains(last));
        assert!(!schedule.contains(last.succ_opt().unwrap()));
        assert!(schedule.for_date(last.succ_opt().unwrap()).is_none());
    }

    #[test]
    fn test_default_program() {
        let schedule = Schedule::default_program().unwrap();
        assert_eq!(schedule.entries().len(), DEFAULT_DAYS);
        assert_eq!(
            schedule.first_date().unwrap().to_string(),
            DEFAULT_ANCHOR
        );
    }
}
