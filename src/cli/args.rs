//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};

/// branchenv - Resolve deployment environments from CI branch names.
#[derive(Debug, Parser)]
#[command(name = "branchenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Arguments for the default `resolve` command
    #[command(flatten)]
    pub resolve: ResolveArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve environments for a branch pair (default if no command specified)
    Resolve(ResolveArgs),

    /// List the branch naming convention tables
    List(ListArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Source branch of the merge
    #[arg(long, env = "BRANCH_SOURCE")]
    pub source: Option<String>,

    /// Destination branch of the merge
    #[arg(long, env = "BRANCH_DESTINATION")]
    pub destination: Option<String>,

    /// Triggering event name (informational)
    #[arg(long, env = "EVENT_NAME")]
    pub event: Option<String>,

    /// Classify and report without writing output files
    #[arg(long)]
    pub dry_run: bool,

    /// Also append the entries to the GITHUB_ENV file
    #[arg(long)]
    pub export_env: bool,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
