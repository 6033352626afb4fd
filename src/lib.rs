//! Runbook - scripted multi-step installation and operations procedures.
//!
//! A runbook is a fixed, ordered sequence of named *procedures*, each made
//! of shell-command *steps*. The engine runs them in order with selective
//! execution (resume from a procedure, or run exactly one), a live
//! per-step status line, interactive-or-forced failure handling, and a
//! plain-text run log of every command and its output.
//!
//! # Modules
//!
//! - [`cli`] - the shared command-line surface for runbook binaries
//! - [`context`] - run-wide state and options
//! - [`engine`] - procedure lifecycle, step runner, and the run loop
//! - [`error`] - error types and result alias
//! - [`logging`] - the run log sink and tracing setup
//! - [`selection`] - resume-from / single-procedure selection
//! - [`shell`] - shell command execution
//! - [`ui`] - terminal output, prompts, and the mock UI for tests
//!
//! # Example
//!
//! ```no_run
//! use runbook::cli::RunbookArgs;
//! use runbook::engine::{Procedure, ProcedureEngine, Runbook};
//! use runbook::ui::create_ui;
//!
//! fn main() -> runbook::Result<()> {
//!     let args = RunbookArgs::parse_or_exit();
//!     runbook::logging::init_tracing(args.debug);
//!
//!     let mut ui = create_ui(true);
//!     let mut engine = ProcedureEngine::new(&args.run_options(), ui.as_mut())?;
//!
//!     let book = Runbook::new()
//!         .procedure(
//!             Procedure::new("mount-disks")
//!                 .step("mount root", "mount /dev/sda1 /mnt"),
//!         )
//!         .procedure(
//!             Procedure::new("copy-files")
//!                 .step("sync system image", "rsync -a /image/ /mnt/"),
//!         );
//!
//!     let report = book.execute(&mut engine)?;
//!     std::process::exit(report.exit_code().into())
//! }
//! ```

pub mod cli;
pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod selection;
pub mod shell;
pub mod ui;

pub use error::{Result, RunbookError};
