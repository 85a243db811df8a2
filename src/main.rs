//! branchenv CLI entry point.

use std::process::ExitCode;

use branchenv::cli::{Cli, CommandDispatcher};
use branchenv::ui::{should_use_colors, Output, OutputMode, Theme};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout stays usable for `--json`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("branchenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("branchenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("branchenv starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };
    let theme = Theme::for_colors(!cli.no_color && should_use_colors());
    let output = Output::new(output_mode, theme);

    let work_dir = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(work_dir);

    match dispatcher.dispatch(&cli, &output) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            output.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
