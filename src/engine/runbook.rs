//! Declared runbooks and the top-level run loop.
//!
//! A [`Runbook`] is the caller-declared, strictly ordered list of
//! procedures. [`Runbook::execute`] drives a [`ProcedureEngine`] across
//! all of them, gating every step on the published permission and
//! stopping as soon as the engine returns a stop verdict. Procedures may
//! depend on side effects of earlier ones (mount before copy), so the
//! loop never reorders or parallelizes.

use crate::error::Result;
use crate::selection::Permission;

use super::procedure::{ProcedureEngine, RunControl, StopReason};

/// One external command with a human-readable description.
#[derive(Debug, Clone)]
pub struct Step {
    /// Shown on the status line and used in prompts.
    pub description: String,
    /// Shell command line, logged verbatim in the audit entry.
    pub command: String,
}

impl Step {
    /// Create a step.
    pub fn new(description: &str, command: &str) -> Self {
        Self {
            description: description.to_string(),
            command: command.to_string(),
        }
    }
}

/// A named, ordered group of steps; the unit of selection.
#[derive(Debug, Clone)]
pub struct Procedure {
    /// Selection name (matched against resume/single targets).
    pub name: String,
    /// Steps, executed in declaration order.
    pub steps: Vec<Step>,
}

impl Procedure {
    /// Create an empty procedure.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
        }
    }

    /// Append a step (builder style).
    pub fn step(mut self, description: &str, command: &str) -> Self {
        self.steps.push(Step::new(description, command));
        self
    }
}

/// The declared, ordered collection of procedures for one run.
#[derive(Debug, Clone, Default)]
pub struct Runbook {
    procedures: Vec<Procedure>,
}

impl Runbook {
    /// Create an empty runbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a procedure (builder style).
    pub fn procedure(mut self, procedure: Procedure) -> Self {
        self.procedures.push(procedure);
        self
    }

    /// The declared procedures, in order.
    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Run every declared procedure through the engine, in order.
    ///
    /// Returns as soon as the engine stops the run; otherwise falls off
    /// the end after the last procedure.
    pub fn execute(&self, engine: &mut ProcedureEngine<'_>) -> Result<RunReport> {
        let mut report = RunReport::default();

        for procedure in &self.procedures {
            match engine.start_procedure(&procedure.name)? {
                Permission::Proceed => {
                    if let Some(reason) = self.run_procedure(engine, procedure, &mut report)? {
                        report.stop = Some(reason);
                        return Ok(report);
                    }
                }
                Permission::Skip | Permission::Undecided => {
                    engine.end_procedure()?;
                    report.skipped.push(procedure.name.clone());
                }
            }
        }

        Ok(report)
    }

    fn run_procedure(
        &self,
        engine: &mut ProcedureEngine<'_>,
        procedure: &Procedure,
        report: &mut RunReport,
    ) -> Result<Option<StopReason>> {
        report.executed.push(procedure.name.clone());

        for step in &procedure.steps {
            if let RunControl::Stop(reason) =
                engine.run_step(&step.description, &step.command)?
            {
                // the failure policy already closed the procedure
                return Ok(Some(reason));
            }
        }

        match engine.end_procedure()? {
            RunControl::Continue => Ok(None),
            RunControl::Stop(reason) => Ok(Some(reason)),
        }
    }
}

/// What a run did, and how the process should exit.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Procedures that ran (including one that failed fatally).
    pub executed: Vec<String>,
    /// Procedures skipped by selection.
    pub skipped: Vec<String>,
    /// The verdict that ended the run early, if any.
    pub stop: Option<StopReason>,
}

impl RunReport {
    /// Whether the run completed without a fatal failure.
    pub fn success(&self) -> bool {
        !matches!(self.stop, Some(StopReason::ProcedureFailed { .. }))
    }

    /// Process exit code: 0 on success, the clamped accumulated status
    /// otherwise.
    pub fn exit_code(&self) -> u8 {
        self.stop.as_ref().map_or(0, StopReason::exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_declares_in_order() {
        let book = Runbook::new()
            .procedure(
                Procedure::new("mount-disks")
                    .step("mount root", "mount /dev/sda1 /mnt")
                    .step("mount boot", "mount /dev/sda2 /mnt/boot"),
            )
            .procedure(Procedure::new("copy-files"));

        let names: Vec<_> = book.procedures().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["mount-disks", "copy-files"]);
        assert_eq!(book.procedures()[0].steps.len(), 2);
        assert_eq!(book.procedures()[0].steps[1].description, "mount boot");
    }

    #[test]
    fn empty_report_is_success_with_exit_zero() {
        let report = RunReport::default();
        assert!(report.success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn single_complete_report_is_success() {
        let report = RunReport {
            stop: Some(StopReason::SingleComplete {
                procedure: "b".to_string(),
            }),
            ..Default::default()
        };
        assert!(report.success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn failed_report_carries_clamped_status() {
        let report = RunReport {
            stop: Some(StopReason::ProcedureFailed {
                procedure: "verify".to_string(),
                status: 300,
            }),
            ..Default::default()
        };
        assert!(!report.success());
        assert_eq!(report.exit_code(), 255);
    }
}
