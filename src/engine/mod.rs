//! The procedure execution engine.
//!
//! This module provides the core of the crate:
//!
//! - [`ProcedureEngine`] - bracketed procedure execution
//!   (`start_procedure` / steps / `end_procedure`) with the
//!   failure-recovery policy
//! - [`RunControl`] / [`StopReason`] - run-ending verdicts as values,
//!   unwound to the top-level loop instead of exiting from deep inside
//!   the step runner
//! - [`Runbook`], [`Procedure`], [`Step`] - the declaration layer and the
//!   top-level run loop
//! - [`RunReport`] - what ran, what was skipped, and the resulting exit
//!   code

pub mod procedure;
pub mod runbook;

pub use procedure::{ProcedureEngine, RunControl, StopReason};
pub use runbook::{Procedure, RunReport, Runbook, Step};
