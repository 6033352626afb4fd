//! CLI argument definitions.
//!
//! Runbook binaries are written by procedure authors; this module gives
//! every one of them the same surface. Selectors and toggles can also
//! come from the environment (`RUNBOOK_*` variables), which is how
//! wrapper scripts usually drive resumption.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use crate::context::RunOptions;

/// Command-line surface shared by runbook binaries.
#[derive(Debug, Clone, Parser)]
#[command(name = "runbook")]
#[command(author, version, about, long_about = None)]
pub struct RunbookArgs {
    /// Resume from the named procedure, skipping everything before it
    #[arg(short = 'r', long, value_name = "NAME", env = "RUNBOOK_RESUME_FROM")]
    pub resume_from: Option<String>,

    /// Run only the named procedure, then stop
    #[arg(short = 's', long, value_name = "NAME", env = "RUNBOOK_SINGLE")]
    pub single: Option<String>,

    /// Abort immediately on the first failing step, without prompting
    #[arg(short = 'x', long, env = "RUNBOOK_EXIT_ON_ERROR")]
    pub exit_on_error: bool,

    /// Show step output on the terminal instead of the run log
    #[arg(short = 'i', long, env = "RUNBOOK_INLINE_OUTPUT")]
    pub inline_output: bool,

    /// Path of the run log (truncated at start)
    #[arg(
        long,
        value_name = "PATH",
        env = "RUNBOOK_LOGFILE",
        default_value = "installation.log"
    )]
    pub logfile: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl RunbookArgs {
    /// Parse the process arguments, exiting on help or errors.
    ///
    /// Help and version exit 0; invalid or missing-argument flags exit 1.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        })
    }

    /// Engine options derived from these arguments.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            resume_from: self.resume_from.clone(),
            single: self.single.clone(),
            exit_on_error: self.exit_on_error,
            inline_output: self.inline_output,
            logfile: self.logfile.clone(),
        }
    }
}
