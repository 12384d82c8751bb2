//! CLI configuration: TOML file plus XDG path resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fittrack_core::reminder::DEFAULT_REMINDER_HOUR;
use fittrack_core::schedule::{DEFAULT_ANCHOR, DEFAULT_DAYS};

#[derive(Debug, Serialize, Deserialize)]
pub struct FittrackConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub schedule: ScheduleSection,
    #[serde(default)]
    pub reminder: ReminderSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataSection {
    /// Directory holding the per-category log files
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleSection {
    /// Anchor date of the training program (YYYY-MM-DD)
    pub anchor: String,
    /// Number of days to generate
    pub days: usize,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_string(),
            days: DEFAULT_DAYS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderSection {
    /// Local wall-clock hour of the daily reminder
    pub hour: u32,
}

impl Default for ReminderSection {
    fn default() -> Self {
        Self {
            hour: DEFAULT_REMINDER_HOUR,
        }
    }
}

impl Default for FittrackConfig {
    fn default() -> Self {
        Self {
            data: DataSection::default(),
            schedule: ScheduleSection::default(),
            reminder: ReminderSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Load the config file, or defaults when none exists yet.
pub fn load_config(path: &Path) -> anyhow::Result<FittrackConfig> {
    if !path.exists() {
        return Ok(FittrackConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &FittrackConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

/// Resolve the data directory: flag/env beats config beats XDG default.
pub fn resolve_data_dir(
    flag: Option<&str>,
    config: &FittrackConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(value) = flag {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    if let Some(value) = &config.data.dir {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_data_dir()
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fittrack"));
        }
    }
    Ok(home_dir()?.join(".config").join("fittrack"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fittrack"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("fittrack"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
