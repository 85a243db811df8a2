//! Branch classification.
//!
//! Turns a source/destination branch pair into an [`EnvironmentDecision`]:
//!
//! 1. Normalise names and rewrite legacy aliases ([`input`])
//! 2. Run the ordered rule set, first match wins ([`rules`])
//! 3. Fill unset environment ids from the environment tables
//! 4. Validate the decision ([`decision`])
//!
//! Classification is a pure function of the two names and the static
//! tables; calling it twice with the same inputs yields the same decision.

pub mod decision;
pub mod input;
pub mod rules;

pub use decision::EnvironmentDecision;
pub use input::{BranchPair, BranchRole, LegacyRewrite};
pub use rules::{ClassificationRule, RuleId, RuleOutcome, RuleSet};

use crate::conventions::{env_key, Environment};
use crate::error::{BranchEnvError, Result};

/// Decides release type and environments for a branch pair.
///
/// # Example
///
/// ```
/// use branchenv::classifier::BranchClassifier;
/// use branchenv::conventions::ReleaseType;
///
/// let classifier = BranchClassifier::new();
/// let decision = classifier.resolve(Some("feature/login"), Some("qa")).unwrap();
/// assert_eq!(decision.release_type, ReleaseType::Regular);
/// assert_eq!(decision.validation_environment, "QA-VALIDATION");
/// ```
pub struct BranchClassifier {
    rules: RuleSet,
}

impl BranchClassifier {
    /// Create a classifier with the built-in rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::with_builtins())
    }

    /// Create a classifier with a custom rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rules, in priority order.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify and validate raw branch names.
    pub fn resolve(
        &self,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> Result<EnvironmentDecision> {
        let pair = BranchPair::normalize(source, destination)?;
        let decision = self.classify(&pair)?;
        decision.validate()?;
        Ok(decision)
    }

    /// Classify a normalised pair without validating the result.
    ///
    /// Fails with [`BranchEnvError::UnknownEnvironment`] when a matching rule
    /// leaves an environment id to the tables and the effective target is not
    /// a known environment.
    pub fn classify(&self, pair: &BranchPair) -> Result<EnvironmentDecision> {
        let Some((rule, outcome)) = self.rules.first_match(pair)? else {
            tracing::debug!(
                "No rule matched {} -> {}",
                pair.source,
                pair.destination
            );
            return Ok(EnvironmentDecision::invalid(&pair.source, &pair.destination));
        };
        tracing::debug!("Rule '{}' matched {} -> {}", rule, pair.source, pair.destination);

        if outcome.release_type.is_invalid() {
            return Ok(EnvironmentDecision::invalid(&pair.source, &pair.destination));
        }

        let environment = match outcome.target {
            Some(target) => target.as_str().to_string(),
            None => pair.destination.clone(),
        };

        let release_environment = match outcome.release_environment {
            Some(id) => id,
            None => Self::lookup(&environment)?.release_id().to_string(),
        };
        let validation_environment = match outcome.validation_environment {
            Some(id) => id,
            None => Self::lookup(&environment)?.validation_id().to_string(),
        };

        Ok(EnvironmentDecision {
            source: pair.source.clone(),
            target: pair.destination.clone(),
            environment,
            release_type: outcome.release_type,
            release_environment,
            validation_environment,
        })
    }

    fn lookup(branch: &str) -> Result<Environment> {
        let key = env_key(branch);
        Environment::from_key(&key).ok_or(BranchEnvError::UnknownEnvironment { key })
    }
}

impl Default for BranchClassifier {
    fn default() -> Self {
        Self::new()
    }
}
