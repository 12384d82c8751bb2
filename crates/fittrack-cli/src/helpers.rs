//! Parsing helpers for dates and day windows.

use chrono::{Local, NaiveDate};

/// Parse a calendar date (YYYY-MM-DD), defaulting to today.
pub fn parse_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        None => Ok(Local::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value)),
    }
}

/// Parse a day window like "7d" or "30d".
pub fn parse_window_days(value: &str) -> anyhow::Result<u32> {
    let digits = value
        .strip_suffix('d')
        .ok_or_else(|| anyhow::anyhow!("Invalid window: {} (expected <days>d, e.g. 7d)", value))?;
    let days: u32 = digits
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid window number: {}", value))?;
    if days == 0 {
        return Err(anyhow::anyhow!("Window must cover at least one day"));
    }
    Ok(days)
}
