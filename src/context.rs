//! Run-wide mutable state.
//!
//! [`RunContext`] replaces the ambient globals a shell implementation of
//! this engine would use: the procedure counter, the currently open
//! procedure, the failure accumulator, and the published permission. It is
//! owned by the engine and mutated only through the lifecycle calls, which
//! preserves single-writer semantics while keeping every dependency
//! explicit.

use std::path::PathBuf;

use crate::selection::{Permission, ResumeTarget};

/// Options fixed for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Procedure to resume from (one-shot).
    pub resume_from: Option<String>,

    /// The only procedure to run this invocation.
    pub single: Option<String>,

    /// Treat any step failure as immediately fatal, without prompting.
    pub exit_on_error: bool,

    /// Send step output to the terminal instead of the run log.
    pub inline_output: bool,

    /// Path of the run log (truncated at engine creation).
    pub logfile: PathBuf,
}

/// Mutable state for one engine invocation.
#[derive(Debug, Default)]
pub struct RunContext {
    procedure_counter: u32,
    current_procedure: Option<String>,
    error_count: i32,
    permission: Permission,
    resume: ResumeTarget,
    single: Option<String>,
    exit_on_error: bool,
    inline_output: bool,
}

impl RunContext {
    /// Build the initial context from run options.
    pub fn new(options: &RunOptions) -> Self {
        Self {
            resume: ResumeTarget::from_option(options.resume_from.clone()),
            single: options.single.clone().filter(|s| !s.is_empty()),
            exit_on_error: options.exit_on_error,
            inline_output: options.inline_output,
            ..Default::default()
        }
    }

    /// Sequence number of the most recently started procedure.
    pub fn procedure_counter(&self) -> u32 {
        self.procedure_counter
    }

    /// Name of the procedure currently bracketed, if any.
    pub fn current_procedure(&self) -> Option<&str> {
        self.current_procedure.as_deref()
    }

    /// Failures accumulated inside the currently open procedure.
    ///
    /// Only meaningful between `start_procedure` and `end_procedure`.
    pub fn error_count(&self) -> i32 {
        self.error_count
    }

    /// The published permission for the current procedure.
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// The single-procedure selector, if set.
    pub fn single(&self) -> Option<&str> {
        self.single.as_deref()
    }

    /// The resume selector state.
    pub fn resume(&self) -> &ResumeTarget {
        &self.resume
    }

    /// Whether step failures are immediately fatal.
    pub fn exit_on_error(&self) -> bool {
        self.exit_on_error
    }

    /// Whether step output goes to the terminal instead of the log.
    pub fn inline_output(&self) -> bool {
        self.inline_output
    }

    /// Open a procedure: advance the counter, reset the failure
    /// accumulator, record the name, and publish the selection verdict.
    pub(crate) fn open(&mut self, name: &str) -> Permission {
        self.procedure_counter += 1;
        self.error_count = 0;
        self.current_procedure = Some(name.to_string());
        self.permission =
            crate::selection::decide(name, self.single.as_deref(), &mut self.resume);
        self.permission
    }

    /// Close the current procedure and reset the published permission.
    pub(crate) fn close(&mut self) -> Option<String> {
        self.permission = Permission::Undecided;
        self.current_procedure.take()
    }

    /// Record a non-forgiven step failure.
    pub(crate) fn record_failure(&mut self, status: i32) {
        self.error_count += status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RunOptions {
        RunOptions {
            logfile: PathBuf::from("installation.log"),
            ..Default::default()
        }
    }

    #[test]
    fn new_context_starts_idle() {
        let ctx = RunContext::new(&options());
        assert_eq!(ctx.procedure_counter(), 0);
        assert_eq!(ctx.current_procedure(), None);
        assert_eq!(ctx.error_count(), 0);
        assert_eq!(ctx.permission(), Permission::Undecided);
    }

    #[test]
    fn open_advances_counter_and_resets_errors() {
        let mut ctx = RunContext::new(&options());
        ctx.open("a");
        ctx.record_failure(3);
        ctx.close();

        ctx.open("b");
        assert_eq!(ctx.procedure_counter(), 2);
        assert_eq!(ctx.error_count(), 0);
        assert_eq!(ctx.current_procedure(), Some("b"));
    }

    #[test]
    fn close_clears_name_and_permission() {
        let mut ctx = RunContext::new(&options());
        ctx.open("a");
        assert_eq!(ctx.close(), Some("a".to_string()));
        assert_eq!(ctx.current_procedure(), None);
        assert_eq!(ctx.permission(), Permission::Undecided);
    }

    #[test]
    fn record_failure_accumulates() {
        let mut ctx = RunContext::new(&options());
        ctx.open("a");
        ctx.record_failure(2);
        ctx.record_failure(5);
        assert_eq!(ctx.error_count(), 7);
    }

    #[test]
    fn empty_selectors_are_ignored() {
        let opts = RunOptions {
            resume_from: Some(String::new()),
            single: Some(String::new()),
            ..options()
        };
        let mut ctx = RunContext::new(&opts);
        assert_eq!(ctx.single(), None);
        assert_eq!(ctx.open("anything"), Permission::Proceed);
    }

    #[test]
    fn counter_is_display_only_under_skip() {
        let opts = RunOptions {
            single: Some("b".to_string()),
            ..options()
        };
        let mut ctx = RunContext::new(&opts);
        assert_eq!(ctx.open("a"), Permission::Skip);
        ctx.close();
        assert_eq!(ctx.open("b"), Permission::Proceed);
        // skipped procedures still advance the counter
        assert_eq!(ctx.procedure_counter(), 2);
    }
}
