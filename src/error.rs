//! Error types for branchenv operations.
//!
//! This module defines [`BranchEnvError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error is terminal: the pipeline step either fully succeeds or
//!   exits non-zero
//! - Configuration errors, table misses and classification failures are
//!   distinct variants with distinct exit codes
//! - Use `anyhow::Error` (via `BranchEnvError::Other`) for unexpected errors

use thiserror::Error;

use crate::classifier::EnvironmentDecision;

/// Core error type for branchenv operations.
#[derive(Debug, Error)]
pub enum BranchEnvError {
    /// A required input (flag or environment variable) is missing.
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },

    /// A fallback lookup hit a branch name that is not a known environment.
    #[error("Unknown environment key '{key}': branch naming rules and environment tables are out of sync")]
    UnknownEnvironment { key: String },

    /// The decision carries neither a release nor a validation environment.
    #[error("{message} (source: {source_branch}, destination: {destination_branch})")]
    InvalidClassification {
        message: String,
        source_branch: String,
        destination_branch: String,
        decision: Box<EnvironmentDecision>,
    },

    /// A branch matched a rule but lacked the data the rule needs.
    #[error("Unhandled branch: {what}")]
    UnhandledCase { what: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BranchEnvError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidClassification { .. } => 1,
            Self::MissingVariable { .. } => 2,
            Self::UnknownEnvironment { .. } => 3,
            Self::UnhandledCase { .. } => 4,
            Self::Io(_) => 74,
            Self::Other(_) => 1,
        }
    }
}

/// Result type alias for branchenv operations.
pub type Result<T> = std::result::Result<T, BranchEnvError>;
