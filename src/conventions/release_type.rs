//! Release type classification outcomes.

use serde::{Serialize, Serializer};

/// Why a branch transition is happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Regular,
    Hotfix,
    Bugfix,
    ValidationOnly,
    ForceDeploy,
    Invalid,
    Helper,
    Retrieve,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 8] = [
        Self::Regular,
        Self::Hotfix,
        Self::Bugfix,
        Self::ValidationOnly,
        Self::ForceDeploy,
        Self::Invalid,
        Self::Helper,
        Self::Retrieve,
    ];

    /// Value written to pipeline outputs.
    ///
    /// A regular promotion is reported as `RELEASE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "RELEASE",
            Self::Hotfix => "HOTFIX",
            Self::Bugfix => "BUGFIX",
            Self::ValidationOnly => "VALIDATION_ONLY",
            Self::ForceDeploy => "FORCE_DEPLOY",
            Self::Invalid => "INVALID",
            Self::Helper => "HELPER",
            Self::Retrieve => "RETRIEVE",
        }
    }

    /// The constant's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            other => other.as_str(),
        }
    }

    /// Reverse lookup from an output value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ReleaseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_is_emitted_as_release() {
        assert_eq!(ReleaseType::Regular.as_str(), "RELEASE");
        assert_eq!(ReleaseType::Regular.name(), "REGULAR");
    }

    #[test]
    fn from_value() {
        assert_eq!(ReleaseType::from_value("RELEASE"), Some(ReleaseType::Regular));
        assert_eq!(
            ReleaseType::from_value("FORCE_DEPLOY"),
            Some(ReleaseType::ForceDeploy)
        );
        assert_eq!(ReleaseType::from_value("REGULAR"), None);
    }

    #[test]
    fn serializes_as_output_value() {
        let json = serde_json::to_string(&ReleaseType::ValidationOnly).unwrap();
        assert_eq!(json, "\"VALIDATION_ONLY\"");
    }
}
