//! Fittrack CLI - a local-first personal fitness logbook
//!
//! Command-line interface over the core library: rolling workout plan,
//! per-category logging, summaries, and the static meal plan.

mod config;
mod helpers;
mod output;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use fittrack_core::log::{
    BodyMeasurement, DietItem, JsonFileStore, LogCategory, LogEntry, LogStore, Meal, SleepRecord,
    WorkoutSet,
};
use fittrack_core::schedule::{default_pattern, Schedule};
use fittrack_core::{exercises, mealplan, reminder, summary, VERSION};

use crate::config::FittrackConfig;
use crate::helpers::{parse_date, parse_window_days};
use crate::output::OutputFormat;

/// Fittrack - a local-first personal fitness logbook
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the data directory
    #[arg(short, long, global = true, env = "FITTRACK_DATA_DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default config
    Init {
        /// Directory where logs will be stored
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },

    /// Show the workout plan for a date
    Plan {
        /// Date to show (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append an entry to one of the logs
    Log {
        #[command(subcommand)]
        entry: LogCommands,
    },

    /// Show logged entries for a date
    Show {
        /// Log category (workout, diet, body, sleep)
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Date to show (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output format (table, plain)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Cross-category summary over a recent window
    Summary {
        /// Window ending today (e.g., "7d", "30d")
        #[arg(long, default_value = "7d")]
        last: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the weekly meal plan
    MealPlan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show preparation instructions for a recipe
    Recipe {
        /// Recipe name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the description of an exercise
    Exercise {
        /// Exercise name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the weekly shopping list
    ShoppingList,

    /// Show when the next daily reminder is due
    Reminder,

    /// Export persisted logs
    Export {
        /// Log category (default: all categories)
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// Output format (json, jsonl)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

#[derive(Subcommand)]
enum LogCommands {
    /// Log one exercise of a workout
    Workout {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Exercise name
        #[arg(long)]
        exercise: String,

        /// Number of working sets
        #[arg(long)]
        sets: u32,

        /// Reps per set
        #[arg(long)]
        reps: u32,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Rate of perceived exertion (1-10)
        #[arg(long)]
        rpe: u32,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Log one meal item
    Diet {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long)]
        meal: String,

        /// Food item
        #[arg(long)]
        food: String,

        /// Calories
        #[arg(long)]
        calories: u32,

        /// Protein in grams
        #[arg(long)]
        protein: u32,

        /// Carbs in grams
        #[arg(long)]
        carbs: u32,

        /// Fats in grams
        #[arg(long)]
        fats: u32,

        /// Water intake in litres
        #[arg(long, default_value_t = 0.0)]
        water: f64,
    },

    /// Log a body-composition measurement
    Body {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Body fat percentage (0-100)
        #[arg(long)]
        body_fat: f64,

        /// Muscle mass in kg
        #[arg(long)]
        muscle_mass: f64,

        /// Visceral fat rating
        #[arg(long)]
        visceral_fat: f64,

        /// Metabolic age
        #[arg(long)]
        metabolic_age: f64,
    },

    /// Log a night of sleep
    Sleep {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Hours slept
        #[arg(long)]
        hours: f64,

        /// Sleep quality (1-10)
        #[arg(long)]
        quality: u32,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = config::default_config_path()?;
    let app_config = config::load_config(&config_path)?;
    let schedule = build_schedule(&app_config)?;

    match cli.command {
        Some(Commands::Init { path }) => {
            let explicit = path.is_some();
            let dir = match path {
                Some(path) => std::path::PathBuf::from(path),
                None => config::resolve_data_dir(cli.data_dir.as_deref(), &app_config)?,
            };
            JsonFileStore::create(&dir)?;

            // An explicit path becomes the configured data directory, so a
            // re-init pointing elsewhere redirects subsequent commands too.
            if !config_path.exists() || explicit {
                let mut new_config = app_config;
                new_config.data.dir = Some(dir.to_string_lossy().to_string());
                config::write_config(&config_path, &new_config)?;
            }

            if !cli.quiet {
                println!("Initialized fittrack data directory at {}", dir.display());
                println!("Config: {}", config_path.display());
            }
        }
        Some(Commands::Plan { date, json }) => {
            let date = parse_date(date.as_deref())?;
            let entry = schedule.for_date(date).ok_or_else(|| {
                anyhow::anyhow!(
                    "No plan available for {} (schedule covers {} to {})",
                    date,
                    schedule_bound(&schedule, true),
                    schedule_bound(&schedule, false)
                )
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                println!("{}", output::plan_text(entry));
            }
        }
        Some(Commands::Log { entry }) => {
            let mut store = open_store(cli.data_dir.as_deref(), &app_config)?;
            let (date, category, entry) = build_log_entry(entry)?;
            ensure_in_schedule(&schedule, date)?;
            store.append(category, date, entry)?;

            if !cli.quiet {
                let count = store.read(category)?.get(&date).map_or(0, Vec::len);
                println!(
                    "Saved {} entry for {} ({} total that day)",
                    category, date, count
                );
            }
        }
        Some(Commands::Show {
            category,
            date,
            json,
            format,
        }) => {
            let store = open_store(cli.data_dir.as_deref(), &app_config)?;
            let category: LogCategory = category.parse()?;
            let date = parse_date(date.as_deref())?;
            let log = store.read(category)?;
            let entries = log.get(&date).cloned().unwrap_or_default();

            let format = output::parse_output_format(format.as_deref())?;
            if json {
                if format.is_some() {
                    return Err(anyhow::anyhow!("--format cannot be used with --json"));
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::entries_json(date, &entries))?
                );
            } else if entries.is_empty() {
                if !cli.quiet {
                    println!("No {} entries for {}.", category, date);
                }
            } else {
                match format.unwrap_or(OutputFormat::Table) {
                    OutputFormat::Table => {
                        if !cli.quiet {
                            println!("{} log for {}", category, date);
                        }
                        println!("{}", output::entries_table(category, &entries));
                    }
                    OutputFormat::Plain => {
                        println!("{}", output::entries_plain(&entries));
                    }
                }
            }
        }
        Some(Commands::Summary { last, json }) => {
            let store = open_store(cli.data_dir.as_deref(), &app_config)?;
            let days = parse_window_days(&last)?;
            let today = Local::now().date_naive();
            let window = summary::DayWindow::ending(today, days);

            let workout_log = store.read(LogCategory::Workout)?;
            let workout = summary::workout_summary(&workout_log, window);
            let last_workout = summary::last_workout_date(&workout_log);
            let diet = summary::diet_summary(&store.read(LogCategory::Diet)?, window);
            let sleep = summary::sleep_summary(&store.read(LogCategory::Sleep)?, window);
            let body_log = store.read(LogCategory::BodyMeasurement)?;
            let weight_change = summary::weight_change(&body_log);

            if json {
                let value = serde_json::json!({
                    "window": { "start": window.start(), "end": window.end(), "days": days },
                    "workout": workout,
                    "last_workout": last_workout,
                    "diet": diet,
                    "sleep": sleep,
                    "weight_change": weight_change,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                if !cli.quiet {
                    println!(
                        "Summary (last {}d, {} to {})",
                        days,
                        window.start(),
                        window.end()
                    );
                }
                println!(
                    "Workout: {} days trained, {} exercises, {} sets",
                    workout.days_trained, workout.exercises, workout.total_sets
                );
                match last_workout {
                    Some(date) => println!("Last logged workout: {}", date),
                    None => println!("Last logged workout: none"),
                }
                println!(
                    "Diet: {} days logged, avg {:.0} kcal, avg {:.0} g protein, avg {:.1} L water",
                    diet.days_logged, diet.avg_calories, diet.avg_protein, diet.avg_water
                );
                println!(
                    "Sleep: {} days logged, avg {:.1} h, avg quality {:.1}",
                    sleep.days_logged, sleep.avg_hours, sleep.avg_quality
                );
                match weight_change {
                    Some(change) => println!("Weight: {}", change),
                    None => println!("Weight: no measurements logged"),
                }
            }
        }
        Some(Commands::MealPlan { json }) => {
            let plan = mealplan::weekly_meal_plan();
            if json {
                println!("{}", serde_json::to_string_pretty(plan)?);
            } else {
                println!("{}", output::meal_plan_table(plan));
            }
        }
        Some(Commands::Recipe { name }) => {
            let recipe = mealplan::recipe(&name)
                .ok_or_else(|| anyhow::anyhow!("Recipe \"{}\" not found", name))?;
            if !cli.quiet {
                println!("{}", recipe.name);
            }
            println!("{}", recipe.instructions);
        }
        Some(Commands::Exercise { name }) => {
            let detail = exercises::exercise(&name)
                .ok_or_else(|| anyhow::anyhow!("Exercise \"{}\" not found", name))?;
            if !cli.quiet {
                println!("{}", detail.name);
            }
            println!("{}", detail.description);
        }
        Some(Commands::ShoppingList) => {
            for item in mealplan::shopping_list() {
                println!("- {}", item);
            }
        }
        Some(Commands::Reminder) => {
            let now = Local::now().naive_local();
            let next = reminder::next_occurrence(now, app_config.reminder.hour)?;
            println!("Next reminder: {}", next.format("%Y-%m-%d %H:%M"));
        }
        Some(Commands::Export { category, format }) => {
            let store = open_store(cli.data_dir.as_deref(), &app_config)?;
            let categories: Vec<LogCategory> = match category {
                Some(name) => vec![name.parse()?],
                None => LogCategory::ALL.to_vec(),
            };

            match format.as_str() {
                "json" => {
                    let mut value = serde_json::Map::new();
                    for category in &categories {
                        let log = store.read(*category)?;
                        value.insert(category.to_string(), serde_json::to_value(&log)?);
                    }
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::Value::Object(value))?
                    );
                }
                "jsonl" => {
                    for category in &categories {
                        let log = store.read(*category)?;
                        for (date, entries) in &log {
                            for entry in entries {
                                let line = serde_json::json!({
                                    "date": date,
                                    "entry": entry,
                                });
                                println!("{}", serde_json::to_string(&line)?);
                            }
                        }
                    }
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "Unsupported export format: {} (use json or jsonl)",
                        other
                    ));
                }
            }
        }
        None => {
            println!("Fittrack v{}", VERSION);
            println!("\nRun `fittrack --help` for usage information.");
        }
    }

    Ok(())
}

fn build_schedule(config: &FittrackConfig) -> anyhow::Result<Schedule> {
    let anchor = NaiveDate::parse_from_str(&config.schedule.anchor, "%Y-%m-%d").map_err(|_| {
        anyhow::anyhow!(
            "Invalid schedule anchor in config (expected YYYY-MM-DD): {}",
            config.schedule.anchor
        )
    })?;
    Ok(Schedule::generate(
        anchor,
        &default_pattern(),
        config.schedule.days,
    )?)
}

fn open_store(flag: Option<&str>, config: &FittrackConfig) -> anyhow::Result<JsonFileStore> {
    let dir = config::resolve_data_dir(flag, config)?;
    Ok(JsonFileStore::open(dir)?)
}

fn schedule_bound(schedule: &Schedule, first: bool) -> String {
    let bound = if first {
        schedule.first_date()
    } else {
        schedule.last_date()
    };
    bound.map_or_else(|| "-".to_string(), |date| date.to_string())
}

/// Log dates are constrained to the generated schedule's range.
fn ensure_in_schedule(schedule: &Schedule, date: NaiveDate) -> anyhow::Result<()> {
    if !schedule.contains(date) {
        return Err(anyhow::anyhow!(
            "Date {} is outside the schedule ({} to {})",
            date,
            schedule_bound(schedule, true),
            schedule_bound(schedule, false)
        ));
    }
    Ok(())
}

fn build_log_entry(command: LogCommands) -> anyhow::Result<(NaiveDate, LogCategory, LogEntry)> {
    match command {
        LogCommands::Workout {
            date,
            exercise,
            sets,
            reps,
            weight,
            rpe,
            notes,
        } => {
            let date = parse_date(date.as_deref())?;
            let entry = LogEntry::Workout(WorkoutSet {
                exercise,
                sets,
                reps,
                weight,
                rpe,
                notes,
            });
            Ok((date, LogCategory::Workout, entry))
        }
        LogCommands::Diet {
            date,
            meal,
            food,
            calories,
            protein,
            carbs,
            fats,
            water,
        } => {
            let date = parse_date(date.as_deref())?;
            let meal: Meal = meal.parse()?;
            let entry = LogEntry::Diet(DietItem {
                meal,
                food,
                calories,
                protein,
                carbs,
                fats,
                water,
            });
            Ok((date, LogCategory::Diet, entry))
        }
        LogCommands::Body {
            date,
            weight,
            body_fat,
            muscle_mass,
            visceral_fat,
            metabolic_age,
        } => {
            let date = parse_date(date.as_deref())?;
            let entry = LogEntry::Body(BodyMeasurement {
                weight,
                body_fat,
                muscle_mass,
                visceral_fat,
                metabolic_age,
            });
            Ok((date, LogCategory::BodyMeasurement, entry))
        }
        LogCommands::Sleep {
            date,
            hours,
            quality,
            notes,
        } => {
            let date = parse_date(date.as_deref())?;
            let entry = LogEntry::Sleep(SleepRecord {
                hours,
                quality,
                notes,
            });
            Ok((date, LogCategory::Sleep, entry))
        }
    }
}
