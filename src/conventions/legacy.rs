//! Old-convention branch aliases.

use serde::Serialize;

use super::environments::Environment;

/// An old-style uppercase branch name that maps onto a canonical environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyBranch {
    /// `DEVELOP`, now `staging`.
    Staging,
    /// `MASTER`, now `prod`.
    Prod,
}

impl LegacyBranch {
    pub const ALL: [LegacyBranch; 2] = [Self::Staging, Self::Prod];

    /// The legacy branch name (upper-case).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staging => "DEVELOP",
            Self::Prod => "MASTER",
        }
    }

    /// The canonical environment this alias stands for.
    pub fn canonical(&self) -> Environment {
        match self {
            Self::Staging => Environment::Staging,
            Self::Prod => Environment::Prod,
        }
    }

    /// Look up a branch name in any case.
    pub fn lookup(branch: &str) -> Option<Self> {
        let upper = branch.to_uppercase();
        Self::ALL.into_iter().find(|l| l.as_str() == upper)
    }
}
