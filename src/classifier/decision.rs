//! The classification result.

use serde::Serialize;

use crate::conventions::{ReleaseType, INVALID_ENVIRONMENT_ID};
use crate::error::{BranchEnvError, Result};

/// Output key for the release environment id.
pub const KEY_RELEASE_ENVIRONMENT: &str = "release-environment";
/// Output key for the validation environment id.
pub const KEY_VALIDATION_ENVIRONMENT: &str = "validation-environment";
/// Output key for the release type.
pub const KEY_RELEASE_TYPE: &str = "release-type";
/// Output key for the effective target environment.
pub const KEY_ENVIRONMENT: &str = "environment";

/// Which deployment a merge/promotion event resolves to.
///
/// Built once per invocation and never mutated. When `release_type` is
/// [`ReleaseType::Invalid`], both environment ids are the `INVALID` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDecision {
    /// Normalised source branch.
    pub source: String,
    /// Normalised destination branch.
    pub target: String,
    /// Effective target environment (`preprod` after a promotion).
    pub environment: String,
    pub release_type: ReleaseType,
    pub release_environment: String,
    pub validation_environment: String,
}

impl EnvironmentDecision {
    /// A decision for a branch pair no rule classified.
    pub fn invalid(source: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            source: source.into(),
            environment: target.clone(),
            target,
            release_type: ReleaseType::Invalid,
            release_environment: INVALID_ENVIRONMENT_ID.to_string(),
            validation_environment: INVALID_ENVIRONMENT_ID.to_string(),
        }
    }

    /// Whether both environment ids are the `INVALID` sentinel.
    pub fn has_no_environment(&self) -> bool {
        self.release_environment == INVALID_ENVIRONMENT_ID
            && self.validation_environment == INVALID_ENVIRONMENT_ID
    }

    /// Check the decision is usable by the pipeline.
    ///
    /// A decision with neither a release nor a validation environment is a
    /// classification failure, except for the staging aggregation branch
    /// which is never deployed or validated.
    pub fn validate(&self) -> Result<()> {
        if self.has_no_environment() && self.target != "staging" {
            return Err(BranchEnvError::InvalidClassification {
                message: "Invalid information provided".to_string(),
                source_branch: self.source.clone(),
                destination_branch: self.target.clone(),
                decision: Box::new(self.clone()),
            });
        }
        Ok(())
    }

    /// The `key=value` entries exported to the pipeline, in write order.
    pub fn output_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_RELEASE_ENVIRONMENT, self.release_environment.to_uppercase()),
            (
                KEY_VALIDATION_ENVIRONMENT,
                self.validation_environment.to_uppercase(),
            ),
            (KEY_RELEASE_TYPE, self.release_type.as_str().to_string()),
            (KEY_ENVIRONMENT, self.environment.to_uppercase()),
        ]
    }
}

impl std::fmt::Display for EnvironmentDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch Information:")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Destination: {}", self.target)?;
        writeln!(f)?;
        writeln!(f, "Chosen environments:")?;
        writeln!(f, "Type: {}", self.release_type)?;
        writeln!(f, "Release: {}", self.release_environment)?;
        write!(f, "Validation: {}", self.validation_environment)
    }
}
