use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fittrack"))
}

struct TestDirs {
    base: PathBuf,
    config: PathBuf,
    data: PathBuf,
}

impl TestDirs {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!("ft_{}_{}_{}", prefix, std::process::id(), nanos));
        let config = base.join("config");
        let data = base.join("data");
        std::fs::create_dir_all(&config).expect("create config dir");
        Self { base, config, data }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", &self.config)
            .env("XDG_DATA_HOME", self.base.join("xdg-data"))
            .env("HOME", &self.base)
            .env_remove("FITTRACK_DATA_DIR");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run fittrack")
    }
}

impl Drop for TestDirs {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn init(dirs: &TestDirs) {
    let data = dirs.data.to_string_lossy().to_string();
    let output = dirs.run(&["init", data.as_str()]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));
    assert!(dirs.data.is_dir());
    assert!(dirs.config.join("fittrack").join("config.toml").exists());
}

#[test]
fn test_init_creates_data_dir_and_config() {
    let dirs = TestDirs::new("init");
    init(&dirs);
}

#[test]
fn test_reinit_with_new_path_redirects_data_dir() {
    let dirs = TestDirs::new("reinit");
    init(&dirs);

    let moved = dirs.base.join("data2");
    let moved_arg = moved.to_string_lossy().to_string();
    let output = dirs.run(&["init", moved_arg.as_str()]);
    assert!(output.status.success(), "re-init failed: {}", stderr(&output));
    assert!(moved.is_dir());

    // Subsequent commands must use the new directory, not the old one.
    let output = dirs.run(&[
        "log", "workout", "--date", "2025-08-16", "--exercise", "Bench Press", "--sets", "4",
        "--reps", "6", "--weight", "80", "--rpe", "8",
    ]);
    assert!(output.status.success(), "log failed: {}", stderr(&output));
    assert!(moved.join("workout_logs.json").exists());
    assert!(!dirs.data.join("workout_logs.json").exists());
}

#[test]
fn test_log_workout_then_show_round_trip() {
    let dirs = TestDirs::new("log_show");
    init(&dirs);

    let output = dirs.run(&[
        "log", "workout", "--date", "2025-08-16", "--exercise", "Bench Press", "--sets", "4",
        "--reps", "6", "--weight", "80", "--rpe", "8",
    ]);
    assert!(output.status.success(), "log failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Saved workout entry for 2025-08-16"));

    let output = dirs.run(&["show", "workout", "--date", "2025-08-16", "--json"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["date"], "2025-08-16");
    assert_eq!(value["entries"].as_array().expect("array").len(), 1);
    assert_eq!(value["entries"][0]["exercise"], "Bench Press");
    assert_eq!(value["entries"][0]["category"], "workout");
}

#[test]
fn test_show_untouched_category_is_not_an_error() {
    let dirs = TestDirs::new("untouched");
    init(&dirs);

    let output = dirs.run(&["show", "diet", "--date", "2025-08-16"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));
    assert!(stdout(&output).contains("No diet entries for 2025-08-16."));
}

#[test]
fn test_appends_accumulate_in_order() {
    let dirs = TestDirs::new("order");
    init(&dirs);

    for exercise in ["Bench Press", "Lateral Raises"] {
        let output = dirs.run(&[
            "log", "workout", "--date", "2025-08-16", "--exercise", exercise, "--sets", "3",
            "--reps", "10", "--weight", "20", "--rpe", "7",
        ]);
        assert!(output.status.success(), "log failed: {}", stderr(&output));
    }

    let output = dirs.run(&["show", "workout", "--date", "2025-08-16", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["entries"][0]["exercise"], "Bench Press");
    assert_eq!(value["entries"][1]["exercise"], "Lateral Raises");
}

#[test]
fn test_out_of_range_rpe_is_rejected() {
    let dirs = TestDirs::new("bad_rpe");
    init(&dirs);

    let output = dirs.run(&[
        "log", "workout", "--date", "2025-08-16", "--exercise", "Bench Press", "--sets", "4",
        "--reps", "6", "--weight", "80", "--rpe", "11",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("RPE must be between 1 and 10"));
}

#[test]
fn test_log_date_outside_schedule_is_rejected() {
    let dirs = TestDirs::new("bounds");
    init(&dirs);

    let output = dirs.run(&[
        "log", "sleep", "--date", "2020-01-01", "--hours", "8", "--quality", "7",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("outside the schedule"));
}

#[test]
fn test_plan_shows_anchor_day_template() {
    let dirs = TestDirs::new("plan");
    init(&dirs);

    let output = dirs.run(&["plan", "--date", "2025-08-16", "--json"]);
    assert!(output.status.success(), "plan failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["date"], "2025-08-16");
    assert_eq!(value["day_name"], "Saturday");
    assert_eq!(value["workout_type"], "Push (Chest/Shoulders/Triceps)");

    // Pattern repeats with period 7.
    let output = dirs.run(&["plan", "--date", "2025-08-23", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["workout_type"], "Push (Chest/Shoulders/Triceps)");
}

#[test]
fn test_plan_outside_range_fails() {
    let dirs = TestDirs::new("plan_range");
    init(&dirs);

    let output = dirs.run(&["plan", "--date", "2030-01-01"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No plan available"));
}

#[test]
fn test_summary_reports_weight_change() {
    let dirs = TestDirs::new("summary");
    init(&dirs);

    for (date, weight) in [("2025-08-16", "90"), ("2025-09-16", "87.5")] {
        let output = dirs.run(&[
            "log", "body", "--date", date, "--weight", weight, "--body-fat", "22",
            "--muscle-mass", "38", "--visceral-fat", "9", "--metabolic-age", "31",
        ]);
        assert!(output.status.success(), "log failed: {}", stderr(&output));
    }

    let output = dirs.run(&["summary", "--json"]);
    assert!(output.status.success(), "summary failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(
        value["weight_change"],
        "90.0 kg \u{2192} 87.5 kg (-2.5 kg)"
    );
    // The reference dates are far outside a window ending today, so the
    // window aggregates stay at their defined zero values.
    assert_eq!(value["diet"]["days_logged"], 0);
    assert_eq!(value["diet"]["avg_calories"], 0.0);
}

#[test]
fn test_summary_reports_last_logged_workout() {
    let dirs = TestDirs::new("last_workout");
    init(&dirs);

    for date in ["2025-08-16", "2025-08-18"] {
        let output = dirs.run(&[
            "log", "workout", "--date", date, "--exercise", "Bench Press", "--sets", "4",
            "--reps", "6", "--weight", "80", "--rpe", "8",
        ]);
        assert!(output.status.success(), "log failed: {}", stderr(&output));
    }

    let output = dirs.run(&["summary", "--json"]);
    assert!(output.status.success(), "summary failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["last_workout"], "2025-08-18");

    let output = dirs.run(&["summary"]);
    assert!(stdout(&output).contains("Last logged workout: 2025-08-18"));
}

#[test]
fn test_export_jsonl_one_line_per_entry() {
    let dirs = TestDirs::new("export");
    init(&dirs);

    let output = dirs.run(&[
        "log", "diet", "--date", "2025-08-16", "--meal", "breakfast", "--food",
        "Protein oatmeal", "--calories", "450", "--protein", "35", "--carbs", "60",
        "--fats", "10", "--water", "0.5",
    ]);
    assert!(output.status.success(), "log failed: {}", stderr(&output));

    let output = dirs.run(&["export", "diet", "--format", "jsonl"]);
    assert!(output.status.success(), "export failed: {}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<&str> = out.trim().lines().collect();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON");
    assert_eq!(value["date"], "2025-08-16");
    assert_eq!(value["entry"]["food"], "Protein oatmeal");
}

#[test]
fn test_meal_plan_and_recipe() {
    let dirs = TestDirs::new("mealplan");

    let output = dirs.run(&["meal-plan", "--json"]);
    assert!(output.status.success(), "meal-plan failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value.as_array().expect("array").len(), 7);

    let output = dirs.run(&["recipe", "chicken curry"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("curry powder"));

    let output = dirs.run(&["recipe", "pizza"]);
    assert!(!output.status.success());
}

#[test]
fn test_exercise_lookup() {
    let dirs = TestDirs::new("exercise");

    let output = dirs.run(&["exercise", "bench press"]);
    assert!(output.status.success(), "exercise failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Bench Press"));
    assert!(stdout(&output).contains("chest, shoulders, and triceps"));

    let output = dirs.run(&["exercise", "Yoga"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn test_commands_without_init_hint_at_init() {
    let dirs = TestDirs::new("no_init");

    let output = dirs.run(&["show", "workout", "--date", "2025-08-16"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("run init first"));
}
