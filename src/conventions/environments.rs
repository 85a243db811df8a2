//! Deployment environments and their external release/validation ids.

use serde::Serialize;

/// Sentinel id meaning "no release" or "no validation".
pub const INVALID_ENVIRONMENT_ID: &str = "INVALID";

/// A canonical deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Qa,
    Staging,
    Uat,
    DataMigration,
    Perftest,
    Preprod,
    Prerelease,
    Prod,
    Invalid,
}

/// Normalise a branch name into a table key: upper-case, hyphens removed.
///
/// ```
/// use branchenv::conventions::env_key;
///
/// assert_eq!(env_key("data-migration"), "DATAMIGRATION");
/// ```
pub fn env_key(branch: &str) -> String {
    branch.to_uppercase().replace('-', "")
}

impl Environment {
    pub const ALL: [Environment; 9] = [
        Self::Qa,
        Self::Staging,
        Self::Uat,
        Self::DataMigration,
        Self::Perftest,
        Self::Preprod,
        Self::Prerelease,
        Self::Prod,
        Self::Invalid,
    ];

    /// The branch name of this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qa => "qa",
            Self::Staging => "staging",
            Self::Uat => "uat",
            Self::DataMigration => "data-migration",
            Self::Perftest => "perftest",
            Self::Preprod => "preprod",
            Self::Prerelease => "prerelease",
            Self::Prod => "prod",
            Self::Invalid => "invalid",
        }
    }

    /// The table key (see [`env_key`]).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Qa => "QA",
            Self::Staging => "STAGING",
            Self::Uat => "UAT",
            Self::DataMigration => "DATAMIGRATION",
            Self::Perftest => "PERFTEST",
            Self::Preprod => "PREPROD",
            Self::Prerelease => "PRERELEASE",
            Self::Prod => "PROD",
            Self::Invalid => "INVALID",
        }
    }

    /// Release system id for this environment.
    ///
    /// QA and PREPROD currently deploy into the localisation sandboxes.
    pub fn release_id(&self) -> &'static str {
        match self {
            Self::Qa => "LocalizationSandbox",
            Self::Staging => "STAGING-RELEASE",
            Self::Uat => "UAT-RELEASE",
            Self::DataMigration => "DATAMIGRATION-RELEASE",
            Self::Perftest => "PERFTEST-RELEASE",
            Self::Preprod => "LocalisationSandbox",
            Self::Prerelease => "PRERELEASE-RELEASE",
            Self::Prod => "PROD-RELEASE",
            Self::Invalid => INVALID_ENVIRONMENT_ID,
        }
    }

    /// Validation system id for this environment.
    pub fn validation_id(&self) -> &'static str {
        match self {
            Self::Qa => "QA-VALIDATION",
            Self::Staging => "STAGING-VALIDATION",
            Self::Uat => "UAT-VALIDATION",
            Self::DataMigration => "DATAMIGRATION-VALIDATION",
            Self::Perftest => "PERFTEST-VALIDATION",
            Self::Preprod => "PREPROD-VALIDATION",
            Self::Prerelease => "PRERELEASE-VALIDATION",
            Self::Prod => "PROD-VALIDATION",
            Self::Invalid => INVALID_ENVIRONMENT_ID,
        }
    }

    /// Look up an environment by its table key.
    ///
    /// The key must already be normalised; use [`Environment::from_branch`]
    /// for raw branch names.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    /// Look up an environment from a branch name in any case, with or
    /// without hyphens.
    pub fn from_branch(branch: &str) -> Option<Self> {
        Self::from_key(&env_key(branch))
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
