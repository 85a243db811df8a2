//! List command implementation.
//!
//! The `branchenv list` command prints the classification rules in priority
//! order, followed by the naming convention tables: environments with their
//! release and validation ids, prefixes, legacy aliases and release types.

use serde::Serialize;

use crate::classifier::RuleSet;
use crate::cli::args::ListArgs;
use crate::conventions::{BranchPrefix, Environment, LegacyBranch, ReleaseType};
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct RuleRow {
    priority: usize,
    id: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct EnvironmentRow {
    branch: &'static str,
    key: &'static str,
    release: &'static str,
    validation: &'static str,
}

#[derive(Debug, Serialize)]
struct PrefixRow {
    name: &'static str,
    prefix: &'static str,
}

#[derive(Debug, Serialize)]
struct LegacyRow {
    alias: &'static str,
    canonical: &'static str,
}

#[derive(Debug, Serialize)]
struct ReleaseTypeRow {
    name: &'static str,
    value: &'static str,
}

/// Snapshot of every convention table.
#[derive(Debug, Serialize)]
pub struct ConventionTables {
    rules: Vec<RuleRow>,
    environments: Vec<EnvironmentRow>,
    prefixes: Vec<PrefixRow>,
    legacy_branches: Vec<LegacyRow>,
    release_types: Vec<ReleaseTypeRow>,
}

impl ConventionTables {
    /// Collect the built-in rules and tables.
    pub fn collect() -> Self {
        Self {
            rules: RuleSet::with_builtins()
                .iter()
                .enumerate()
                .map(|(index, rule)| RuleRow {
                    priority: index + 1,
                    id: rule.id().to_string(),
                    description: rule.description().to_string(),
                })
                .collect(),
            environments: Environment::ALL
                .into_iter()
                .map(|env| EnvironmentRow {
                    branch: env.as_str(),
                    key: env.key(),
                    release: env.release_id(),
                    validation: env.validation_id(),
                })
                .collect(),
            prefixes: BranchPrefix::ALL
                .into_iter()
                .map(|p| PrefixRow {
                    name: p.name(),
                    prefix: p.as_str(),
                })
                .collect(),
            legacy_branches: LegacyBranch::ALL
                .into_iter()
                .map(|l| LegacyRow {
                    alias: l.as_str(),
                    canonical: l.canonical().as_str(),
                })
                .collect(),
            release_types: ReleaseType::ALL
                .into_iter()
                .map(|t| ReleaseTypeRow {
                    name: t.name(),
                    value: t.as_str(),
                })
                .collect(),
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn render(tables: &ConventionTables, output: &Output) -> String {
        let theme = output.theme();
        let mut lines = vec![theme.format_header("Rules (first match wins):")];
        for row in &tables.rules {
            lines.push(format!(
                "  {:>2}. {:<24} {}",
                row.priority,
                theme.key.apply_to(&row.id),
                theme.dim.apply_to(&row.description)
            ));
        }

        lines.push(String::new());
        lines.push(theme.format_header("Environments:"));
        for row in &tables.environments {
            lines.push(format!(
                "  {:<16} {} {}",
                theme.key.apply_to(row.branch),
                row.release,
                theme.dim.apply_to(format!("/ {}", row.validation))
            ));
        }

        lines.push(String::new());
        lines.push(theme.format_header("Prefixes:"));
        for row in &tables.prefixes {
            lines.push(format!(
                "  {:<26} {}",
                theme.key.apply_to(row.name),
                row.prefix
            ));
        }

        lines.push(String::new());
        lines.push(theme.format_header("Legacy branches:"));
        for row in &tables.legacy_branches {
            lines.push(format!(
                "  {} {}",
                theme.key.apply_to(row.alias),
                theme.dim.apply_to(format!("-> {}", row.canonical))
            ));
        }

        lines.push(String::new());
        lines.push(theme.format_header("Release types:"));
        for row in &tables.release_types {
            lines.push(format!("  {:<16} {}", theme.key.apply_to(row.name), row.value));
        }

        lines.join("\n")
    }
}

impl Command for ListCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let tables = ConventionTables::collect();
        if self.args.json {
            let json = serde_json::to_string_pretty(&tables).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            output.println(&Self::render(&tables, output));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{OutputMode, Theme};

    #[test]
    fn collects_every_table() {
        let tables = ConventionTables::collect();
        assert_eq!(tables.rules.len(), 9);
        assert_eq!(tables.environments.len(), 9);
        assert_eq!(tables.prefixes.len(), 12);
        assert_eq!(tables.legacy_branches.len(), 2);
        assert_eq!(tables.release_types.len(), 8);
    }

    #[test]
    fn rules_listed_in_priority_order() {
        let tables = ConventionTables::collect();
        let ids: Vec<&str> = tables.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"staging-aggregation"));
        assert_eq!(ids.last(), Some(&"destination-environment"));
        assert_eq!(tables.rules[1].priority, 2);
        assert_eq!(
            tables.rules[1].description,
            "Promotions into release branches target preprod"
        );
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(ConventionTables::collect()).unwrap();
        assert_eq!(json["environments"][0]["branch"], "qa");
        assert_eq!(json["environments"][0]["validation"], "QA-VALIDATION");
        assert_eq!(json["legacy_branches"][0]["alias"], "DEVELOP");
        assert_eq!(json["legacy_branches"][0]["canonical"], "staging");
        assert_eq!(json["rules"][0]["id"], "staging-aggregation");
        assert_eq!(json["rules"][0]["priority"], 1);
    }

    #[test]
    fn render_plain() {
        let output = Output::new(OutputMode::Normal, Theme::plain());
        let text = ListCommand::render(&ConventionTables::collect(), &output);
        assert!(text.contains(" 1. staging-aggregation"));
        assert!(text.contains("Merges into staging are aggregated"));
        assert!(text.contains("data-migration"));
        assert!(text.contains("PROD-RELEASE / PROD-VALIDATION"));
        assert!(text.contains("MASTER -> prod"));
        assert!(text.contains("release/hotfix-"));
    }

    #[test]
    fn execute_succeeds() {
        let output = Output::new(OutputMode::Quiet, Theme::plain());
        let result = ListCommand::new(ListArgs::default()).execute(&output).unwrap();
        assert!(result.success);
    }
}
