//! Non-interactive UI for CI/headless environments.
//!
//! No terminal means no recovery prompt: a failing step cannot be
//! forgiven interactively, so `confirm` refuses rather than blocking
//! forever on input that will never arrive. Headless runs are expected to
//! set exit-on-error instead.

use crate::error::{Result, RunbookError};

use super::status::PlainStatus;
use super::{FieldSpec, StatusHandle, UserInterface};

/// UI implementation for non-interactive mode.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn procedure_banner(&mut self, number: u32, name: &str) {
        println!("[{}] {}", number, name);
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        Err(RunbookError::PromptUnavailable {
            question: question.to_string(),
            reason: "non-interactive run; use exit-on-error for headless execution".to_string(),
        })
    }

    fn input(&mut self, spec: &FieldSpec) -> Result<String> {
        if let Some(default) = &spec.default {
            return Ok(default.clone());
        }
        if spec.required {
            return Err(RunbookError::FieldRequired {
                name: spec.name.clone(),
            });
        }
        Ok(String::new())
    }

    fn start_step(&mut self, _description: &str) -> Box<dyn StatusHandle> {
        Box::new(PlainStatus)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
