//! Resolve command implementation.
//!
//! The `branchenv resolve` command classifies the branch pair, exports the
//! decision to the pipeline files and prints a report. The decision is
//! validated and every output path is resolved before anything is written,
//! so a failing run leaves no partial output behind.

use std::path::{Path, PathBuf};

use crate::classifier::{BranchClassifier, EnvironmentDecision};
use crate::cli::args::ResolveArgs;
use crate::environment::{CiDetector, PipelineInputs, RunMode};
use crate::error::Result;
use crate::output::{OutputFile, OutputWriter};
use crate::ui::report::render_decision;
use crate::ui::{Output, Report};

use super::dispatcher::{Command, CommandResult};

type EnvLookup = Box<dyn Fn(&str) -> std::result::Result<String, std::env::VarError>>;

/// The resolve command implementation.
pub struct ResolveCommand {
    work_dir: PathBuf,
    args: ResolveArgs,
    mode: Option<RunMode>,
    env_fn: EnvLookup,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(work_dir: &Path, args: ResolveArgs) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            args,
            mode: None,
            env_fn: Box::new(|key| std::env::var(key)),
        }
    }

    /// Force the run mode instead of detecting it.
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Use a custom env var lookup for CI detection and output paths.
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError> + 'static,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    fn inputs(&self) -> PipelineInputs {
        PipelineInputs::new(
            self.args.source.clone(),
            self.args.destination.clone(),
            self.args.event.clone(),
        )
    }

    fn lookup(&self, key: &str) -> std::result::Result<String, std::env::VarError> {
        (self.env_fn)(key)
    }

    fn export(&self, decision: &EnvironmentDecision, output: &Output) -> Result<()> {
        let mode = match &self.mode {
            Some(mode) => mode.clone(),
            None => CiDetector::new().detect_with_env(|key| self.lookup(key)),
        };
        let entries = decision.output_entries();

        let mut files = vec![OutputFile::Output];
        if self.args.export_env {
            files.push(OutputFile::Env);
        }

        // All paths must resolve before the first write.
        let paths = files
            .iter()
            .map(|file| file.resolve_with_env(&mode, &self.work_dir, |key| self.lookup(key)))
            .collect::<Result<Vec<_>>>()?;

        for path in paths {
            OutputWriter::new(&path).append_all(&entries)?;
            // Keep stdout clean for --json.
            if !self.args.json {
                output.detail(&format!(
                    "Wrote {} entries to {} ({} mode)",
                    entries.len(),
                    path.display(),
                    mode
                ));
            }
        }
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let inputs = self.inputs();
        let pair = inputs.normalize()?;
        let decision = BranchClassifier::new().classify(&pair)?;

        if let Err(err) = decision.validate() {
            eprintln!("{}", render_decision(&decision, output.theme()));
            return Err(err);
        }

        if self.args.dry_run {
            if !self.args.json {
                output.detail("Dry run: no output files written");
            }
        } else {
            self.export(&decision, output)?;
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&decision).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            output.println(&Report::new(&inputs, &pair, &decision).render(output.theme()));
        }

        Ok(CommandResult::success())
    }
}
