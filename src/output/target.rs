//! Output file resolution.

use std::path::{Path, PathBuf};

use crate::environment::RunMode;
use crate::error::{BranchEnvError, Result};

/// First line of a freshly created local test file.
pub const LOCAL_FILE_HEADER: &str = "##### LOCAL TEST FILE #####";

/// One of the pipeline files a decision can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFile {
    /// Step outputs (`GITHUB_OUTPUT`).
    Output,
    /// Exported environment for later steps (`GITHUB_ENV`).
    Env,
}

impl OutputFile {
    /// The variable holding the file path in CI.
    pub fn variable(&self) -> &'static str {
        match self {
            Self::Output => "GITHUB_OUTPUT",
            Self::Env => "GITHUB_ENV",
        }
    }

    /// File name used outside CI.
    pub fn local_name(&self) -> &'static str {
        match self {
            Self::Output => "github_output",
            Self::Env => "github_env",
        }
    }

    /// Resolve the file path for the given mode.
    ///
    /// In CI the path comes from [`OutputFile::variable`]. Locally the file
    /// lives in `base_dir` and is created with [`LOCAL_FILE_HEADER`] when it
    /// does not exist yet.
    pub fn resolve_with_env<F>(
        &self,
        mode: &RunMode,
        base_dir: &Path,
        env_fn: F,
    ) -> Result<PathBuf>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        match mode {
            RunMode::Ci => env_fn(self.variable())
                .map(PathBuf::from)
                .map_err(|_| BranchEnvError::MissingVariable {
                    name: self.variable().to_string(),
                }),
            RunMode::Local => {
                let path = base_dir.join(self.local_name());
                if !path.exists() {
                    tracing::debug!("Creating local test file {}", path.display());
                    std::fs::write(&path, format!("{}\n", LOCAL_FILE_HEADER))?;
                }
                Ok(path)
            }
        }
    }
}
