//! Branch name normalisation.
//!
//! Branch names are compared lower-case against the prefix tables. Legacy
//! uppercase aliases (`DEVELOP`, `MASTER`) are rewritten to their canonical
//! environment names before any rule runs.

use serde::Serialize;

use crate::conventions::LegacyBranch;
use crate::error::{BranchEnvError, Result};

/// Which side of the merge a branch name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchRole {
    Source,
    Destination,
}

impl std::fmt::Display for BranchRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// A legacy alias that was rewritten during normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRewrite {
    pub role: BranchRole,
    pub alias: LegacyBranch,
    /// The canonical branch name that replaced the alias.
    pub canonical: String,
}

/// A normalised source/destination pair ready for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPair {
    /// Lower-cased source branch, after legacy rewrite.
    pub source: String,
    /// Lower-cased destination branch, after legacy rewrite.
    pub destination: String,
    /// Legacy aliases rewritten on the way in.
    pub rewrites: Vec<LegacyRewrite>,
}

impl BranchPair {
    /// Normalise raw branch names.
    ///
    /// Both names are required. Each name is checked against the legacy
    /// alias table on its own; a legacy source is rewritten from its own
    /// alias, never from the destination's.
    ///
    /// # Example
    ///
    /// ```
    /// use branchenv::classifier::BranchPair;
    ///
    /// let pair = BranchPair::normalize(Some("Feature/Login"), Some("DEVELOP")).unwrap();
    /// assert_eq!(pair.source, "feature/login");
    /// assert_eq!(pair.destination, "staging");
    /// ```
    pub fn normalize(source: Option<&str>, destination: Option<&str>) -> Result<Self> {
        let destination = destination.ok_or_else(|| BranchEnvError::MissingVariable {
            name: "BRANCH_DESTINATION".to_string(),
        })?;
        let source = source.ok_or_else(|| BranchEnvError::MissingVariable {
            name: "BRANCH_SOURCE".to_string(),
        })?;

        let mut rewrites = Vec::new();
        let destination = Self::rewrite(destination, BranchRole::Destination, &mut rewrites);
        let source = Self::rewrite(source, BranchRole::Source, &mut rewrites);

        Ok(Self {
            source,
            destination,
            rewrites,
        })
    }

    fn rewrite(branch: &str, role: BranchRole, rewrites: &mut Vec<LegacyRewrite>) -> String {
        match LegacyBranch::lookup(branch) {
            Some(alias) => {
                let canonical = alias.canonical().as_str().to_string();
                tracing::info!(
                    "Old convention name detected: {} branch {} is now {}",
                    role,
                    alias.as_str(),
                    canonical
                );
                rewrites.push(LegacyRewrite {
                    role,
                    alias,
                    canonical: canonical.clone(),
                });
                canonical
            }
            None => branch.to_lowercase(),
        }
    }
}
