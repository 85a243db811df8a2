//! Append-only `key=value` writer.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Appends `key=value` lines to a pipeline file.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append entries in order with a single open of the file.
    pub fn append_all(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for (key, value) in entries {
            tracing::debug!("{} <- {}={}", self.path.display(), key, value);
            writeln!(file, "{}={}", key, value)?;
        }
        Ok(())
    }
}
