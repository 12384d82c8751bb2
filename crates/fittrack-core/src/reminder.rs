//! Daily reminder re-arm arithmetic.
//!
//! The reminder fires at a fixed local wall-clock hour and re-arms itself
//! for the next day after each firing. Delivery is a platform concern and
//! stays outside this crate; only the next-occurrence computation lives
//! here.

use chrono::{Days, NaiveDateTime};

use crate::error::{FittrackError, Result};

/// Default reminder hour (9 AM local time).
pub const DEFAULT_REMINDER_HOUR: u32 = 9;

/// Next occurrence of `hour:00:00` strictly after `now`.
///
/// If the hour is still ahead today, that is the answer; otherwise the same
/// hour tomorrow. Re-arming after a firing therefore always lands on the
/// next day.
pub fn next_occurrence(now: NaiveDateTime, hour: u32) -> Result<NaiveDateTime> {
    let target = now
        .date()
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| FittrackError::InvalidInput(format!("Invalid reminder hour: {}", hour)))?;

    if target > now {
        return Ok(target);
    }
    target
        .checked_add_days(Days::new(1))
        .ok_or_else(|| FittrackError::InvalidInput("Reminder date out of range".to_string()))
}
