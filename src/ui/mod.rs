//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - the live step status line and the typed field prompt
//!
//! The engine talks only to the trait, so every execution path can be
//! exercised in tests with scripted prompt answers.

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod status;
pub mod terminal;
pub mod theme;

pub use mock::{MockStatus, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use prompts::{prompt_field, FieldSpec};
pub use status::{PlainStatus, StepSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RunbookTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show the boundary banner for a procedure that is about to run.
    fn procedure_banner(&mut self, number: u32, name: &str);

    /// Ask a yes/no question, reprompting until a recognized answer.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Resolve a typed input field to a value.
    fn input(&mut self, spec: &FieldSpec) -> Result<String>;

    /// Start the live status line for a step (pending mark + description).
    fn start_step(&mut self, description: &str) -> Box<dyn StatusHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for the single-line step status.
///
/// The pending mark shown by `start_step` is overwritten by exactly one of
/// the finish calls.
pub trait StatusHandle {
    /// Overwrite the pending mark with the success mark.
    fn finish_success(&mut self, msg: &str);

    /// Overwrite the pending mark with the failure mark.
    fn finish_error(&mut self, msg: &str);
}
