//! Output formatting for the CLI: tables, plain text, and JSON values.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use fittrack_core::log::{LogCategory, LogEntry};
use fittrack_core::mealplan::MealPlanDay;
use fittrack_core::schedule::ScheduleEntry;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

fn base_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Column headers for a category's entry table.
pub fn category_headers(category: LogCategory) -> Vec<&'static str> {
    match category {
        LogCategory::Workout => vec!["Exercise", "Sets", "Reps", "Weight (kg)", "RPE", "Notes"],
        LogCategory::Diet => vec![
            "Meal",
            "Food",
            "Calories",
            "Protein (g)",
            "Carbs (g)",
            "Fats (g)",
            "Water (L)",
        ],
        LogCategory::BodyMeasurement => vec![
            "Weight (kg)",
            "Body Fat %",
            "Muscle Mass (kg)",
            "Visceral Fat",
            "Metabolic Age",
        ],
        LogCategory::Sleep => vec!["Hours", "Quality", "Notes"],
    }
}

/// One row of cell values for an entry, matching `category_headers`.
pub fn entry_row(entry: &LogEntry) -> Vec<String> {
    match entry {
        LogEntry::Workout(set) => vec![
            set.exercise.clone(),
            set.sets.to_string(),
            set.reps.to_string(),
            format!("{:.1}", set.weight),
            set.rpe.to_string(),
            set.notes.clone(),
        ],
        LogEntry::Diet(item) => vec![
            item.meal.to_string(),
            item.food.clone(),
            item.calories.to_string(),
            item.protein.to_string(),
            item.carbs.to_string(),
            item.fats.to_string(),
            format!("{:.1}", item.water),
        ],
        LogEntry::Body(measurement) => vec![
            format!("{:.1}", measurement.weight),
            format!("{:.1}", measurement.body_fat),
            format!("{:.1}", measurement.muscle_mass),
            format!("{:.1}", measurement.visceral_fat),
            format!("{:.1}", measurement.metabolic_age),
        ],
        LogEntry::Sleep(record) => vec![
            format!("{:.1}", record.hours),
            record.quality.to_string(),
            record.notes.clone(),
        ],
    }
}

/// Render a date's entries as a table.
pub fn entries_table(category: LogCategory, entries: &[LogEntry]) -> Table {
    let mut table = base_table(category_headers(category));
    for entry in entries {
        table.add_row(entry_row(entry));
    }
    table
}

/// Render a date's entries as plain lines for scripts.
pub fn entries_plain(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry_row(entry).join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one schedule day the way the plan view shows it.
pub fn plan_text(entry: &ScheduleEntry) -> String {
    let mut out = format!(
        "{} ({}) \u{2013} {}\n",
        entry.day_name, entry.date, entry.workout_type
    );
    let fields = [
        ("Main Lifts", entry.main_lifts.as_str()),
        ("Accessory", entry.accessory.as_str()),
        ("Abs Block", entry.abs_block.as_str()),
        ("Rehab Notes", entry.rehab.as_str()),
        ("Conditioning", entry.conditioning.as_str()),
    ];
    let mut table = base_table(vec!["Block", "Plan"]);
    for (label, value) in fields {
        let value = if value.is_empty() { "None" } else { value };
        table.add_row(vec![label, value]);
    }
    out.push_str(&table.to_string());
    out
}

/// Render the weekly meal plan.
pub fn meal_plan_table(plan: &[MealPlanDay]) -> Table {
    let mut table = base_table(vec!["Day", "Breakfast", "Meal 1", "Meal 2"]);
    for day in plan {
        table.add_row(vec![day.day, day.breakfast, day.meal1, day.meal2]);
    }
    table
}

/// JSON value for one date's entries.
pub fn entries_json(date: NaiveDate, entries: &[LogEntry]) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "entries": entries,
    })
}
