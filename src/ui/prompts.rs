//! Interactive prompts.
//!
//! The confirmation prompt backs the step-failure recovery question; the
//! typed [`FieldSpec`] prompt lets procedure authors collect values (a
//! target disk, a hostname) up front without name-based indirection.

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{Result, RunbookError};

use super::UserInterface;

/// Convert dialoguer errors to RunbookError.
fn map_dialoguer_err(e: dialoguer::Error) -> RunbookError {
    RunbookError::Io(e.into())
}

/// Descriptor for one input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Identifier, used by tests and scripted answers.
    pub name: String,
    /// The question shown to the operator.
    pub question: String,
    /// Value used when the operator just presses enter.
    pub default: Option<String>,
    /// Whether an empty value is acceptable.
    pub required: bool,
}

impl FieldSpec {
    /// A required field with no default.
    pub fn required(name: &str, question: &str) -> Self {
        Self {
            name: name.to_string(),
            question: question.to_string(),
            default: None,
            required: true,
        }
    }

    /// An optional field with a default value.
    pub fn with_default(name: &str, question: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            question: question.to_string(),
            default: Some(default.to_string()),
            required: false,
        }
    }
}

/// Ask a yes/no question on the given terminal.
///
/// Dialoguer only accepts y/n and reprompts on anything else, which is
/// exactly the recovery-prompt contract: block until a recognized answer.
pub fn confirm_on(question: &str, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(question)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Ask for a field value on the given terminal.
pub fn input_on(spec: &FieldSpec, term: &Term) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(&spec.question)
        .allow_empty(!spec.required);

    if let Some(default) = &spec.default {
        input = input.default(default.clone());
    }

    input.interact_on(term).map_err(map_dialoguer_err)
}

/// Resolve a field through a UI, enforcing required-ness.
///
/// Interactive UIs reprompt until a required field is non-empty;
/// non-interactive ones fail fast instead of looping forever.
pub fn prompt_field(ui: &mut dyn UserInterface, spec: &FieldSpec) -> Result<String> {
    loop {
        let value = ui.input(spec)?;
        if !value.trim().is_empty() || !spec.required {
            return Ok(value);
        }
        if !ui.is_interactive() {
            return Err(RunbookError::FieldRequired {
                name: spec.name.clone(),
            });
        }
        ui.error(&format!("a value for '{}' is required", spec.name));
    }
}
