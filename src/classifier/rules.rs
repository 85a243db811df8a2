//! Classification rules.
//!
//! Rules are evaluated in registration order and the first rule that
//! matches decides the outcome. Each rule is a small type implementing
//! [`ClassificationRule`] so that it can be tested on its own.
//!
//! The built-in order is:
//!
//! 1. Staging aggregation
//! 2. Promotion to preprod
//! 3. Validation only (`validation/<sandbox>`)
//! 4. Forced deploy (`deploy/<sandbox>`)
//! 5. Hotfix (`hotfix/`)
//! 6. Bugfix (`fix/`)
//! 7. Helper (`helper/`)
//! 8. Retrieve (`pulldown/`)
//! 9. Regular by destination environment name

use super::input::BranchPair;
use crate::conventions::{BranchPrefix, Environment, ReleaseType, INVALID_ENVIRONMENT_ID};
use crate::error::{BranchEnvError, Result};

/// Unique identifier for a classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a matching rule decided.
///
/// Environment ids left as `None` are filled from the environment tables
/// using the effective target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub release_type: ReleaseType,
    /// Overrides the destination as the effective target environment.
    pub target: Option<Environment>,
    pub release_environment: Option<String>,
    pub validation_environment: Option<String>,
}

impl RuleOutcome {
    /// An outcome that only fixes the release type.
    pub fn release_type(release_type: ReleaseType) -> Self {
        Self {
            release_type,
            target: None,
            release_environment: None,
            validation_environment: None,
        }
    }
}

/// A single prioritised classification rule.
pub trait ClassificationRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable description of what the rule matches.
    fn description(&self) -> &str;

    /// Return an outcome if this rule matches the pair.
    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>>;
}

/// Destination `staging` only aggregates features: never deployed, never
/// validated.
pub struct StagingAggregationRule;

impl ClassificationRule for StagingAggregationRule {
    fn id(&self) -> RuleId {
        RuleId::new("staging-aggregation")
    }

    fn description(&self) -> &str {
        "Merges into staging are aggregated without deployment or validation"
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if pair.destination != Environment::Staging.as_str() {
            return Ok(None);
        }
        Ok(Some(RuleOutcome {
            release_type: ReleaseType::Regular,
            target: None,
            release_environment: Some(INVALID_ENVIRONMENT_ID.to_string()),
            validation_environment: Some(INVALID_ENVIRONMENT_ID.to_string()),
        }))
    }
}

/// Release branches fed from staging, fixes or helpers, and hotfix release
/// branches fed from hotfix features, promote to preprod.
pub struct PreprodPromotionRule;

impl PreprodPromotionRule {
    fn is_promotion(pair: &BranchPair) -> bool {
        let into_release = BranchPrefix::Release.matches(&pair.destination)
            && (pair.source == Environment::Staging.as_str()
                || BranchPrefix::Bugfix.matches(&pair.source)
                || BranchPrefix::Helper.matches(&pair.source));
        let hotfix_release = BranchPrefix::Hotfix.matches(&pair.destination)
            && BranchPrefix::HotfixFeature.matches(&pair.source);
        into_release || hotfix_release
    }
}

impl ClassificationRule for PreprodPromotionRule {
    fn id(&self) -> RuleId {
        RuleId::new("preprod-promotion")
    }

    fn description(&self) -> &str {
        "Promotions into release branches target preprod"
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if !Self::is_promotion(pair) {
            return Ok(None);
        }
        Ok(Some(RuleOutcome {
            target: Some(Environment::Preprod),
            ..RuleOutcome::release_type(ReleaseType::Regular)
        }))
    }
}

/// Extract the sandbox name from a `<prefix>/<sandbox>` source branch.
fn sandbox_name(prefix: BranchPrefix, source: &str) -> Result<String> {
    prefix
        .segment(source)
        .map(str::to_uppercase)
        .ok_or_else(|| BranchEnvError::UnhandledCase {
            what: format!("'{}' names no sandbox after '{}'", source, prefix),
        })
}

/// `validation/<sandbox>` validates against the named sandbox only.
pub struct ValidationOnlyRule;

impl ClassificationRule for ValidationOnlyRule {
    fn id(&self) -> RuleId {
        RuleId::new("validation-only")
    }

    fn description(&self) -> &str {
        "validation/<sandbox> validates in the named sandbox without releasing"
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if !BranchPrefix::Validation.matches(&pair.source) {
            return Ok(None);
        }
        let sandbox = sandbox_name(BranchPrefix::Validation, &pair.source)?;
        Ok(Some(RuleOutcome {
            release_type: ReleaseType::ValidationOnly,
            target: None,
            release_environment: Some(INVALID_ENVIRONMENT_ID.to_string()),
            validation_environment: Some(sandbox),
        }))
    }
}

/// `deploy/<sandbox>` deploys straight into the named sandbox.
pub struct ForceDeployRule;

impl ClassificationRule for ForceDeployRule {
    fn id(&self) -> RuleId {
        RuleId::new("force-deploy")
    }

    fn description(&self) -> &str {
        "deploy/<sandbox> releases into the named sandbox without validation"
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if !BranchPrefix::Deploy.matches(&pair.source) {
            return Ok(None);
        }
        let sandbox = sandbox_name(BranchPrefix::Deploy, &pair.source)?;
        Ok(Some(RuleOutcome {
            release_type: ReleaseType::ForceDeploy,
            target: None,
            release_environment: Some(sandbox),
            validation_environment: Some(INVALID_ENVIRONMENT_ID.to_string()),
        }))
    }
}

/// A source prefix that maps straight onto a release type.
pub struct SourcePrefixRule {
    prefix: BranchPrefix,
    release_type: ReleaseType,
    description: String,
}

impl SourcePrefixRule {
    pub fn new(prefix: BranchPrefix, release_type: ReleaseType) -> Self {
        Self {
            prefix,
            release_type,
            description: format!("{}* sources are {} releases", prefix, release_type),
        }
    }
}

impl ClassificationRule for SourcePrefixRule {
    fn id(&self) -> RuleId {
        RuleId::new(format!(
            "source-{}",
            self.prefix.name().to_lowercase().replace('_', "-")
        ))
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if !self.prefix.matches(&pair.source) {
            return Ok(None);
        }
        Ok(Some(RuleOutcome::release_type(self.release_type)))
    }
}

/// A destination named after a known environment is a regular release.
pub struct DestinationEnvironmentRule;

impl ClassificationRule for DestinationEnvironmentRule {
    fn id(&self) -> RuleId {
        RuleId::new("destination-environment")
    }

    fn description(&self) -> &str {
        "Merges into an environment branch are regular releases"
    }

    fn apply(&self, pair: &BranchPair) -> Result<Option<RuleOutcome>> {
        if Environment::from_branch(&pair.destination).is_none() {
            return Ok(None);
        }
        Ok(Some(RuleOutcome::release_type(ReleaseType::Regular)))
    }
}

/// Ordered collection of classification rules.
pub struct RuleSet {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a rule set with the built-in rules in priority order.
    pub fn with_builtins() -> Self {
        let mut rules = Self::new();
        rules.push(Box::new(StagingAggregationRule));
        rules.push(Box::new(PreprodPromotionRule));
        rules.push(Box::new(ValidationOnlyRule));
        rules.push(Box::new(ForceDeployRule));
        rules.push(Box::new(SourcePrefixRule::new(
            BranchPrefix::HotfixFeature,
            ReleaseType::Hotfix,
        )));
        rules.push(Box::new(SourcePrefixRule::new(
            BranchPrefix::Bugfix,
            ReleaseType::Bugfix,
        )));
        rules.push(Box::new(SourcePrefixRule::new(
            BranchPrefix::Helper,
            ReleaseType::Helper,
        )));
        rules.push(Box::new(SourcePrefixRule::new(
            BranchPrefix::Retrieve,
            ReleaseType::Retrieve,
        )));
        rules.push(Box::new(DestinationEnvironmentRule));
        rules
    }

    /// Append a rule with the lowest priority so far.
    pub fn push(&mut self, rule: Box<dyn ClassificationRule>) {
        self.rules.push(rule);
    }

    /// Evaluate rules in order, returning the first match.
    pub fn first_match(&self, pair: &BranchPair) -> Result<Option<(RuleId, RuleOutcome)>> {
        for rule in &self.rules {
            if let Some(outcome) = rule.apply(pair)? {
                return Ok(Some((rule.id(), outcome)));
            }
        }
        Ok(None)
    }

    /// Iterate over rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ClassificationRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_builtins()
    }
}
