//! Resolver inputs.
//!
//! The branch pair and event name are gathered once into a
//! [`PipelineInputs`] value that is passed to the classifier explicitly.
//! Nothing is read from the process environment after this point.

use serde::Serialize;

use crate::classifier::{BranchClassifier, BranchPair, EnvironmentDecision};
use crate::error::Result;

/// Variable holding the destination branch.
pub const BRANCH_DESTINATION: &str = "BRANCH_DESTINATION";
/// Variable holding the source branch.
pub const BRANCH_SOURCE: &str = "BRANCH_SOURCE";
/// Variable holding the triggering event name.
pub const EVENT_NAME: &str = "EVENT_NAME";

/// Raw inputs for one resolver invocation.
///
/// Branch names are kept as given; normalisation happens in the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineInputs {
    pub source_branch: Option<String>,
    pub destination_branch: Option<String>,
    /// Informational only.
    pub event_name: Option<String>,
}

impl PipelineInputs {
    /// Build inputs from explicit values.
    pub fn new(
        source_branch: Option<String>,
        destination_branch: Option<String>,
        event_name: Option<String>,
    ) -> Self {
        Self {
            source_branch,
            destination_branch,
            event_name,
        }
    }

    /// Read inputs through an env var lookup.
    pub fn from_env_fn<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        Self {
            source_branch: env_fn(BRANCH_SOURCE).ok(),
            destination_branch: env_fn(BRANCH_DESTINATION).ok(),
            event_name: env_fn(EVENT_NAME).ok(),
        }
    }

    /// Normalise the branch pair, failing if either branch is missing.
    pub fn normalize(&self) -> Result<BranchPair> {
        if let Some(event) = &self.event_name {
            tracing::debug!("Resolving for event {}", event);
        }
        BranchPair::normalize(
            self.source_branch.as_deref(),
            self.destination_branch.as_deref(),
        )
    }

    /// Classify and validate these inputs.
    pub fn resolve(&self, classifier: &BranchClassifier) -> Result<EnvironmentDecision> {
        let pair = self.normalize()?;
        let decision = classifier.classify(&pair)?;
        decision.validate()?;
        Ok(decision)
    }
}
