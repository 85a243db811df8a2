//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing human output through `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    work_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher; local test files are written to `work_dir`.
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(&self.work_dir, args.clone());
                cmd.execute(output)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(output)
            }
            None => {
                // Default to resolve with the top-level arguments
                let cmd = super::resolve::ResolveCommand::new(&self.work_dir, cli.resolve.clone());
                cmd.execute(output)
            }
        }
    }
}
