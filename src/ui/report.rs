//! Human-readable resolution report.

use super::theme::Theme;
use crate::classifier::{BranchPair, EnvironmentDecision, LegacyRewrite};
use crate::environment::PipelineInputs;

/// Everything shown to the operator after a resolution.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub inputs: &'a PipelineInputs,
    pub rewrites: &'a [LegacyRewrite],
    pub decision: &'a EnvironmentDecision,
}

impl<'a> Report<'a> {
    pub fn new(
        inputs: &'a PipelineInputs,
        pair: &'a BranchPair,
        decision: &'a EnvironmentDecision,
    ) -> Self {
        Self {
            inputs,
            rewrites: &pair.rewrites,
            decision,
        }
    }

    /// Render the report as lines of text.
    pub fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![theme.format_header("Input Values:")];
        lines.push(theme.format_key_value(
            "source_branch",
            self.inputs.source_branch.as_deref().unwrap_or_default(),
        ));
        lines.push(theme.format_key_value(
            "destination_branch",
            self.inputs.destination_branch.as_deref().unwrap_or_default(),
        ));
        if let Some(event) = &self.inputs.event_name {
            lines.push(theme.format_key_value("event", event));
        }

        for rewrite in self.rewrites {
            lines.push(String::new());
            lines.push(theme.format_warning("Old convention name detected!"));
            lines.push(format!("New {} branch: {}", rewrite.role, rewrite.canonical));
        }

        if self.decision.target == "staging" && self.decision.has_no_environment() {
            lines.push(String::new());
            lines.push(theme.format_warning(
                "Staging branch is used only for feature aggregation. Skipping validation and deployment.",
            ));
        }

        lines.push(String::new());
        lines.push(render_decision(self.decision, theme));
        lines.join("\n")
    }
}

/// Render the branch and environment block of a decision.
pub fn render_decision(decision: &EnvironmentDecision, theme: &Theme) -> String {
    [
        theme.format_header("Branch Information:"),
        theme.format_key_value("Source", &decision.source),
        theme.format_key_value("Destination", &decision.target),
        String::new(),
        theme.format_header("Chosen environments:"),
        theme.format_key_value("Type", decision.release_type.as_str()),
        theme.format_key_value("Release", &decision.release_environment),
        theme.format_key_value("Validation", &decision.validation_environment),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::BranchClassifier;

    fn report_text(source: &str, destination: &str) -> String {
        let inputs = PipelineInputs::new(
            Some(source.to_string()),
            Some(destination.to_string()),
            Some("pull_request".to_string()),
        );
        let pair = BranchPair::normalize(Some(source), Some(destination)).unwrap();
        let decision = BranchClassifier::new().classify(&pair).unwrap();
        Report::new(&inputs, &pair, &decision).render(&Theme::plain())
    }

    #[test]
    fn shows_inputs_and_decision() {
        let text = report_text("feature/login", "qa");
        assert!(text.contains("source_branch: feature/login"));
        assert!(text.contains("destination_branch: qa"));
        assert!(text.contains("event: pull_request"));
        assert!(text.contains("Type: RELEASE"));
        assert!(text.contains("Validation: QA-VALIDATION"));
    }

    #[test]
    fn shows_legacy_rewrite() {
        let text = report_text("feature/login", "DEVELOP");
        assert!(text.contains("Old convention name detected!"));
        assert!(text.contains("New destination branch: staging"));
    }

    #[test]
    fn shows_staging_notice() {
        let text = report_text("feature/login", "staging");
        assert!(text.contains("feature aggregation"));
        assert!(text.contains("Release: INVALID"));
    }

    #[test]
    fn no_staging_notice_elsewhere() {
        assert!(!report_text("feature/login", "uat").contains("feature aggregation"));
    }
}
