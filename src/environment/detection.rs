//! CI detection.
//!
//! The `CI` variable selects between writing to the real pipeline files and
//! writing to local test files. Other well-known CI variables are only used
//! for diagnostics.

/// Where the resolver is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Inside a CI runner; output paths come from the environment.
    Ci,
    /// Outside CI; output goes to local test files.
    Local,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ci => write!(f, "ci"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Variables set by CI providers other than the generic `CI`.
const PROVIDER_VARS: [&str; 6] = [
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "BUILDKITE",
    "TRAVIS",
];

/// Detects the [`RunMode`].
///
/// # Example
///
/// ```
/// use branchenv::environment::{CiDetector, RunMode};
///
/// let mode = CiDetector::new().detect_with_env(|key| match key {
///     "CI" => Ok("true".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert_eq!(mode, RunMode::Ci);
/// ```
#[derive(Debug, Default)]
pub struct CiDetector;

impl CiDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the run mode from the process environment.
    pub fn detect(&self) -> RunMode {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(&self, env_fn: F) -> RunMode
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        if env_fn("CI").is_ok() {
            return RunMode::Ci;
        }

        // A provider without `CI` is unusual enough to mention; local files
        // will not reach the pipeline.
        if let Some(var) = self.provider_var(&env_fn) {
            tracing::warn!("{} is set but CI is not; writing to local test files", var);
        }

        RunMode::Local
    }

    /// The first provider-specific CI variable that is set.
    pub fn provider_var<F>(&self, env_fn: &F) -> Option<&'static str>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        PROVIDER_VARS.into_iter().find(|var| env_fn(var).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn local_in_clean_env() {
        let mode = CiDetector::new().detect_with_env(make_env(&[]));
        assert_eq!(mode, RunMode::Local);
    }

    #[test]
    fn ci_from_ci_var() {
        let mode = CiDetector::new().detect_with_env(make_env(&[("CI", "true")]));
        assert_eq!(mode, RunMode::Ci);
    }

    #[test]
    fn ci_var_presence_is_enough() {
        let mode = CiDetector::new().detect_with_env(make_env(&[("CI", "")]));
        assert_eq!(mode, RunMode::Ci);
    }

    #[test]
    fn provider_without_ci_stays_local() {
        let mode = CiDetector::new().detect_with_env(make_env(&[("GITHUB_ACTIONS", "true")]));
        assert_eq!(mode, RunMode::Local);
    }

    #[test]
    fn provider_var_reports_first_match() {
        let env_fn = make_env(&[("TRAVIS", "true"), ("GITLAB_CI", "true")]);
        assert_eq!(CiDetector::new().provider_var(&env_fn), Some("GITLAB_CI"));
    }

    #[test]
    fn run_mode_display() {
        assert_eq!(RunMode::Ci.to_string(), "ci");
        assert_eq!(RunMode::Local.to_string(), "local");
    }
}
