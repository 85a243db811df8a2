//! Integration tests for the branchenv binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command running outside CI in a fresh directory.
fn local_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("branchenv"));
    cmd.current_dir(temp.path())
        .env_remove("CI")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_ENV")
        .env_remove("BRANCH_SOURCE")
        .env_remove("BRANCH_DESTINATION")
        .env_remove("EVENT_NAME")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("branchenv"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolve deployment environments"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("branchenv"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn resolve_from_environment_variables() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.env("BRANCH_SOURCE", "feature/login")
        .env("BRANCH_DESTINATION", "QA")
        .env("EVENT_NAME", "pull_request");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Type: RELEASE"))
        .stdout(predicate::str::contains("Validation: QA-VALIDATION"));

    let content = fs::read_to_string(temp.path().join("github_output"))?;
    assert!(content.starts_with("##### LOCAL TEST FILE #####\n"));
    assert!(content.contains("validation-environment=QA-VALIDATION\n"));
    assert!(content.contains("release-type=RELEASE\n"));
    assert!(content.contains("environment=QA\n"));
    Ok(())
}

#[test]
fn resolve_subcommand_with_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args([
        "resolve",
        "--source",
        "validation/Sandbox-3",
        "--destination",
        "uat",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Type: VALIDATION_ONLY"));

    let content = fs::read_to_string(temp.path().join("github_output"))?;
    assert!(content.contains("release-environment=INVALID\n"));
    assert!(content.contains("validation-environment=SANDBOX-3\n"));
    Ok(())
}

#[test]
fn ci_mode_appends_to_github_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = temp.path().join("out");
    let env = temp.path().join("env");
    fs::write(&output, "earlier=1\n")?;

    let mut cmd = local_cmd(&temp);
    cmd.env("CI", "true")
        .env("GITHUB_OUTPUT", &output)
        .env("GITHUB_ENV", &env)
        .args([
            "--source",
            "hotfix/payment",
            "--destination",
            "release/hotfix-2024",
            "--export-env",
        ]);
    cmd.assert().success();

    let written = fs::read_to_string(&output)?;
    assert!(written.starts_with("earlier=1\n"));
    assert!(written.contains("release-type=RELEASE\n"));
    assert!(written.contains("environment=PREPROD\n"));
    assert!(written.contains("validation-environment=PREPROD-VALIDATION\n"));
    assert!(fs::read_to_string(&env)?.contains("environment=PREPROD\n"));
    assert!(!temp.path().join("github_output").exists());
    Ok(())
}

#[test]
fn ci_mode_missing_env_file_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = temp.path().join("out");
    fs::write(&output, "earlier=1\n")?;

    let mut cmd = local_cmd(&temp);
    cmd.env("CI", "true").env("GITHUB_OUTPUT", &output).args([
        "--source",
        "feature/x",
        "--destination",
        "qa",
        "--export-env",
    ]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("GITHUB_ENV"));

    assert_eq!(fs::read_to_string(&output)?, "earlier=1\n");
    Ok(())
}

#[test]
fn staging_reports_aggregation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args(["--source", "feature/x", "--destination", "develop"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Old convention name detected!"))
        .stdout(predicate::str::contains("feature aggregation"));

    let content = fs::read_to_string(temp.path().join("github_output"))?;
    assert!(content.contains("release-environment=INVALID\n"));
    assert!(content.contains("environment=STAGING\n"));
    Ok(())
}

#[test]
fn invalid_classification_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args(["--source", "randombranch", "--destination", "randombranch"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid information provided"))
        .stderr(predicate::str::contains("randombranch"))
        .stderr(predicate::str::contains("Type: INVALID"));
    assert!(!temp.path().join("github_output").exists());
    Ok(())
}

#[test]
fn unknown_environment_exits_with_table_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args(["--source", "fix/typo", "--destination", "main"]);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown environment key 'MAIN'"));
    Ok(())
}

#[test]
fn missing_destination_exits_with_configuration_error() -> Result<(), Box<dyn std::error::Error>>
{
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args(["--source", "feature/x"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("BRANCH_DESTINATION"));
    Ok(())
}

#[test]
fn json_output_and_dry_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args([
        "--source",
        "pulldown/prod",
        "--destination",
        "perftest",
        "--json",
        "--dry-run",
    ]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["releaseType"], "RETRIEVE");
    assert_eq!(json["releaseEnvironment"], "PERFTEST-RELEASE");
    assert!(!temp.path().join("github_output").exists());
    Ok(())
}

#[test]
fn verbose_json_keeps_stdout_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args([
        "--verbose",
        "--source",
        "feature/x",
        "--destination",
        "qa",
        "--json",
    ]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["environment"], "qa");
    assert_eq!(json["validationEnvironment"], "QA-VALIDATION");
    assert!(temp.path().join("github_output").exists());
    Ok(())
}

#[test]
fn quiet_suppresses_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.args(["--quiet", "--source", "feature/x", "--destination", "prod"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn list_prints_tables() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = local_cmd(&temp);
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LocalizationSandbox"))
        .stdout(predicate::str::contains("pulldown/"))
        .stdout(predicate::str::contains("preprod-promotion"))
        .stdout(predicate::str::contains("Promotions into release branches target preprod"));
    Ok(())
}
