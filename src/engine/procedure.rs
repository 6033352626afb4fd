//! Procedure lifecycle and the step runner.
//!
//! A procedure is bracketed by [`ProcedureEngine::start_procedure`] and
//! [`ProcedureEngine::end_procedure`]; between them the caller issues
//! steps with [`ProcedureEngine::run_step`], but only after checking the
//! permission returned by the start call. Skipped procedures produce no
//! log entries and no display output.
//!
//! Run-ending decisions never terminate the process from inside the
//! engine. They are returned as [`RunControl::Stop`] values that the
//! caller's top-level loop converts into a process exit code.

use std::path::Path;

use crate::context::{RunContext, RunOptions};
use crate::error::Result;
use crate::logging::RunLog;
use crate::selection::Permission;
use crate::shell::{self, CommandOptions};
use crate::ui::UserInterface;

/// Verdict after a step or a procedure boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunControl {
    /// Keep going with the next step or procedure.
    Continue,

    /// The run is over; nothing further may execute.
    Stop(StopReason),
}

impl RunControl {
    /// Whether this verdict ends the run.
    pub fn should_stop(&self) -> bool {
        matches!(self, RunControl::Stop(_))
    }
}

/// Why a run ended early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Single-procedure mode finished its one target.
    SingleComplete { procedure: String },

    /// A procedure accumulated unforgiven failures.
    ProcedureFailed { procedure: String, status: i32 },
}

impl StopReason {
    /// Process exit code for this verdict.
    ///
    /// Failure statuses are clamped to 1..=255: an accumulated count above
    /// 255 would otherwise wrap modulo 256 on POSIX and could read as
    /// success.
    pub fn exit_code(&self) -> u8 {
        match self {
            StopReason::SingleComplete { .. } => 0,
            StopReason::ProcedureFailed { status, .. } => (*status).clamp(1, 255) as u8,
        }
    }
}

/// Bracketed procedure execution against one run log and one UI.
pub struct ProcedureEngine<'a> {
    ctx: RunContext,
    log: RunLog,
    ui: &'a mut dyn UserInterface,
}

impl<'a> ProcedureEngine<'a> {
    /// Create an engine, truncating the run log named by the options.
    pub fn new(options: &RunOptions, ui: &'a mut dyn UserInterface) -> Result<Self> {
        let log = RunLog::create(&options.logfile)?;
        Ok(Self {
            ctx: RunContext::new(options),
            log,
            ui,
        })
    }

    /// The run-wide state, for inspection.
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Path of the run log.
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Open a procedure and publish its execution permission.
    ///
    /// The caller MUST check the returned permission before issuing any
    /// step. When the procedure is skipped, nothing is logged or shown.
    pub fn start_procedure(&mut self, name: &str) -> Result<Permission> {
        let permission = self.ctx.open(name);
        tracing::debug!(
            procedure = name,
            number = self.ctx.procedure_counter(),
            ?permission,
            "procedure start"
        );

        if permission.is_proceed() {
            self.ui
                .procedure_banner(self.ctx.procedure_counter(), name);
            self.log
                .procedure_started(self.ctx.procedure_counter(), name)?;
        }
        Ok(permission)
    }

    /// Execute one step of the currently open procedure.
    ///
    /// Precondition: the enclosing `start_procedure` returned
    /// [`Permission::Proceed`]. The runner does not re-check; gating is
    /// the caller's contract.
    ///
    /// A `Stop` return means the failure policy already closed the
    /// procedure; the caller must not issue further steps or call
    /// `end_procedure` again.
    pub fn run_step(&mut self, description: &str, command: &str) -> Result<RunControl> {
        debug_assert!(
            self.ctx.permission().is_proceed(),
            "run_step issued without Proceed permission"
        );

        let result = if self.ctx.inline_output() {
            let result = shell::execute(command, &CommandOptions::default())?;
            if result.success {
                self.ui.success(description);
            } else {
                self.ui.error(description);
            }
            result
        } else {
            self.log.audit(command)?;
            let mut status = self.ui.start_step(description);
            let result = match shell::execute(
                command,
                &CommandOptions {
                    capture: true,
                    ..Default::default()
                },
            ) {
                Ok(result) => result,
                Err(e) => {
                    status.finish_error(description);
                    return Err(e);
                }
            };
            self.log.output(&result.stdout)?;
            self.log.output(&result.stderr)?;
            if result.success {
                status.finish_success(description);
            } else {
                status.finish_error(description);
            }
            result
        };

        if result.success {
            return Ok(RunControl::Continue);
        }

        let status = result.status();
        tracing::debug!(step = description, status, "step failed");

        if self.ctx.exit_on_error() {
            self.ctx.record_failure(status);
            return self.end_procedure();
        }

        let question = format!(
            "'{}' failed with status {}. Ignore and continue?",
            description, status
        );
        if self.ui.confirm(&question)? {
            // forgiven: no trace in the error count
            self.log.note(&format!(
                "(ignored) {} failed with status {}",
                description, status
            ))?;
            return Ok(RunControl::Continue);
        }

        self.ctx.record_failure(status);
        self.end_procedure()
    }

    /// Close the current procedure and report its outcome.
    ///
    /// Skipped procedures close silently. A clean close of the single
    /// target ends the run with [`StopReason::SingleComplete`]; a close
    /// with accumulated failures ends it with
    /// [`StopReason::ProcedureFailed`].
    pub fn end_procedure(&mut self) -> Result<RunControl> {
        if !self.ctx.permission().is_proceed() {
            self.ctx.close();
            return Ok(RunControl::Continue);
        }

        let errors = self.ctx.error_count();
        let name = self.ctx.close().unwrap_or_default();

        if errors == 0 {
            self.log.procedure_success(&name)?;
            self.ui.success(&format!("{} completed", name));

            if self.ctx.single() == Some(name.as_str()) {
                tracing::debug!(procedure = %name, "single target complete");
                return Ok(RunControl::Stop(StopReason::SingleComplete {
                    procedure: name,
                }));
            }
            return Ok(RunControl::Continue);
        }

        self.log.procedure_failed(&name, errors)?;
        self.ui.error(&format!("{} failed (status {})", name, errors));
        Ok(RunControl::Stop(StopReason::ProcedureFailed {
            procedure: name,
            status: errors,
        }))
    }
}
