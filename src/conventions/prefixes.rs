//! Branch-name prefixes.

use serde::Serialize;

/// A branch-name prefix recognised by the naming convention.
///
/// Prefixes are lower-case; callers must lower-case branch names before
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchPrefix {
    Validation,
    Release,
    Deploy,
    /// Feature branch carrying a hotfix (`hotfix/`).
    HotfixFeature,
    /// Release branch carrying a hotfix (`release/hotfix-`).
    Hotfix,
    Bugfix,
    Feature,
    Feat,
    Retrieve,
    Helper,
    /// Malformed legacy feature prefix (`feature-`).
    WrongFeatureFormatOne,
    /// Malformed legacy feature prefix (`feat-`).
    WrongFeatureFormatTwo,
}

impl BranchPrefix {
    /// All prefixes, in declaration order.
    pub const ALL: [BranchPrefix; 12] = [
        Self::Validation,
        Self::Release,
        Self::Deploy,
        Self::HotfixFeature,
        Self::Hotfix,
        Self::Bugfix,
        Self::Feature,
        Self::Feat,
        Self::Retrieve,
        Self::Helper,
        Self::WrongFeatureFormatOne,
        Self::WrongFeatureFormatTwo,
    ];

    /// The literal prefix text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation/",
            Self::Release => "release/",
            Self::Deploy => "deploy/",
            Self::HotfixFeature => "hotfix/",
            Self::Hotfix => "release/hotfix-",
            Self::Bugfix => "fix/",
            Self::Feature => "feature/",
            Self::Feat => "feat/",
            Self::Retrieve => "pulldown/",
            Self::Helper => "helper/",
            Self::WrongFeatureFormatOne => "feature-",
            Self::WrongFeatureFormatTwo => "feat-",
        }
    }

    /// The constant's name, as used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Release => "RELEASE",
            Self::Deploy => "DEPLOY",
            Self::HotfixFeature => "HOTFIX_FEATURE",
            Self::Hotfix => "HOTFIX",
            Self::Bugfix => "BUGFIX",
            Self::Feature => "FEATURE",
            Self::Feat => "FEAT",
            Self::Retrieve => "RETRIEVE",
            Self::Helper => "HELPER",
            Self::WrongFeatureFormatOne => "WRONG_FEATURE_FORMAT_ONE",
            Self::WrongFeatureFormatTwo => "WRONG_FEATURE_FORMAT_TWO",
        }
    }

    /// Reverse lookup from the literal prefix text.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Check whether a (lower-cased) branch name starts with this prefix.
    pub fn matches(&self, branch: &str) -> bool {
        branch.starts_with(self.as_str())
    }

    /// The segment after the first `/` of a prefixed branch, if any.
    ///
    /// `validation/sandbox-a/extra` yields `sandbox-a`. Empty segments are
    /// treated as missing.
    pub fn segment<'a>(&self, branch: &'a str) -> Option<&'a str> {
        if !self.matches(branch) {
            return None;
        }
        branch.split('/').nth(1).filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for BranchPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotfix_release_prefix_is_nested_under_release() {
        assert!(BranchPrefix::Release.matches("release/hotfix-2024"));
        assert!(BranchPrefix::Hotfix.matches("release/hotfix-2024"));
        assert!(!BranchPrefix::Hotfix.matches("release/2024"));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(!BranchPrefix::Bugfix.matches("FIX/thing"));
        assert!(BranchPrefix::Bugfix.matches("fix/thing"));
    }

    #[test]
    fn segment_takes_second_path_component() {
        assert_eq!(
            BranchPrefix::Validation.segment("validation/sandbox-a/extra"),
            Some("sandbox-a")
        );
        assert_eq!(BranchPrefix::Deploy.segment("deploy/uat1"), Some("uat1"));
    }

    #[test]
    fn segment_missing_or_empty() {
        assert_eq!(BranchPrefix::Validation.segment("validation/"), None);
        assert_eq!(BranchPrefix::Deploy.segment("feature/x"), None);
    }

    #[test]
    fn reverse_lookup_by_value() {
        assert_eq!(
            BranchPrefix::from_value("pulldown/"),
            Some(BranchPrefix::Retrieve)
        );
        assert_eq!(BranchPrefix::from_value("chore/"), None);
    }

    #[test]
    fn every_prefix_round_trips_through_value() {
        for prefix in BranchPrefix::ALL {
            assert_eq!(BranchPrefix::from_value(prefix.as_str()), Some(prefix));
        }
    }
}
