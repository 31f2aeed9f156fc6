use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::Result;

pub const FAILED_INVALID_INPUT: &str = "Screening failed - invalid input files";
pub const FAILED_NO_SKILLS: &str = "Screening failed - no keywords in JD";

/// Append-only text log with one timestamped line per screening run.
#[derive(Debug, Clone)]
pub struct ScreeningLog {
    path: PathBuf,
}

impl ScreeningLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort append. Failures are reported through `tracing` and never
    /// returned.
    pub fn append(&self, message: &str) {
        if let Err(e) = self.try_append(message) {
            tracing::warn!("Could not write to screening log {}: {}", self.path.display(), e);
        }
    }

    pub fn try_append(&self, message: &str) -> Result<()> {
        let entry = format_entry(Local::now().naive_local(), message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;

        Ok(())
    }
}

pub fn format_entry(timestamp: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}\n", timestamp.format("%Y-%m-%d %H:%M:%S"), message)
}
