//! branchenv - Resolve deployment environments from CI branch names.
//!
//! Given the source and destination branch of a merge or promotion, branchenv
//! decides which environment the change is headed for, which release type
//! applies, and which release/validation environment ids the rest of the
//! pipeline should use.
//!
//! # Modules
//!
//! - [`classifier`] - Branch pair normalisation, ordered rules and decisions
//! - [`cli`] - Command-line interface and argument parsing
//! - [`conventions`] - Static prefix, alias and environment tables
//! - [`environment`] - CI detection and resolver inputs
//! - [`error`] - Error types and result aliases
//! - [`output`] - Pipeline output files
//! - [`ui`] - Terminal output and reports
//!
//! # Example
//!
//! ```
//! use branchenv::classifier::BranchClassifier;
//! use branchenv::conventions::ReleaseType;
//!
//! let decision = BranchClassifier::new()
//!     .resolve(Some("deploy/sandbox-7"), Some("qa"))
//!     .unwrap();
//! assert_eq!(decision.release_type, ReleaseType::ForceDeploy);
//! assert_eq!(decision.release_environment, "SANDBOX-7");
//! assert_eq!(decision.validation_environment, "INVALID");
//! ```

pub mod classifier;
pub mod cli;
pub mod conventions;
pub mod environment;
pub mod error;
pub mod output;
pub mod ui;

pub use error::{BranchEnvError, Result};
