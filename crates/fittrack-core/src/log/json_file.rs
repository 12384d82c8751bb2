//! JSON-file log backend.
//!
//! One JSON file per category under a data directory. Every write
//! replaces the whole category file: the serialized mapping is written to a
//! temp file and swapped in with an atomic rename, so readers always see a
//! complete mapping and a crashed write cannot leave a torn file. Write cost
//! is linear in the category's logged history, which is acceptable at
//! personal-use data volumes.
//!
//! Concurrent processes still race read-modify-write against each other
//! (last writer wins for the whole category); within one process the store
//! serializes appends through `&mut self`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::store::{check_entry, LogStore};
use super::types::{CategoryLog, LogCategory, LogEntry};
use crate::error::{FittrackError, Result};

/// Log store backed by one JSON file per category.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create the data directory (if needed) and open a store over it.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            FittrackError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    /// Open a store over an existing data directory.
    ///
    /// # Errors
    ///
    /// Returns `FittrackError::NotFound` if the directory does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(FittrackError::NotFound(format!(
                "Data directory {} does not exist (run init first)",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    /// The directory holding the category files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn category_path(&self, category: LogCategory) -> PathBuf {
        self.dir.join(format!("{}.json", category.storage_key()))
    }

    fn write_category(&self, category: LogCategory, log: &CategoryLog) -> Result<()> {
        let path = self.category_path(category);
        let contents = serde_json::to_string_pretty(log)?;
        atomic_write(&path, &contents).map_err(|e| {
            FittrackError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

impl LogStore for JsonFileStore {
    fn read(&self, category: LogCategory) -> Result<CategoryLog> {
        let path = self.category_path(category);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            // Nothing logged yet for this category.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CategoryLog::new()),
            Err(e) => {
                return Err(FittrackError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&contents).map_err(|e| {
            FittrackError::Storage(format!("Corrupt log file {}: {}", path.display(), e))
        })
    }

    fn append(&mut self, category: LogCategory, date: NaiveDate, entry: LogEntry) -> Result<()> {
        check_entry(category, &entry)?;
        let mut log = self.read(category)?;
        log.entry(date).or_default().push(entry);
        self.write_category(category, &log)
    }
}

/// Write `contents` to a temp file next to `path` and rename it into place.
///
/// On platforms where rename fails when the target exists (notably Windows),
/// the target is removed first and the rename retried. The temp file is
/// cleaned up if the swap ultimately fails.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents)?;

    if let Err(initial_err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(path);
        fs::rename(&temp_path, path).map_err(|retry_err| {
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
