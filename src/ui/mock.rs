//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers are scripted as
//! a queue; input answers are keyed by field name.
//!
//! # Example
//!
//! ```
//! use runbook::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! ui.message("starting");
//! assert!(ui.confirm("ignore and continue?").unwrap());
//! assert!(ui.has_message("starting"));
//! assert_eq!(ui.confirms_asked(), &["ignore and continue?".to_string()]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::{Result, RunbookError};

use super::{FieldSpec, StatusHandle, UserInterface};

/// Outcome of one finished step, as observed by a [`MockStatus`] handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFinish {
    /// Message passed to the finish call.
    pub message: String,
    /// Whether the finish was the success variant.
    pub success: bool,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    banners: Vec<(u32, String)>,
    confirms_asked: Vec<String>,
    confirm_queue: VecDeque<bool>,
    input_responses: HashMap<String, String>,
    steps_started: Vec<String>,
    step_finishes: Arc<Mutex<Vec<StepFinish>>>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirmation prompt.
    ///
    /// Answers are consumed in order; an empty queue makes `confirm`
    /// fail, which catches prompts the test did not expect.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_queue.push_back(answer);
    }

    /// Set the answer for an input field, by field name.
    pub fn set_input_response(&mut self, name: &str, response: &str) {
        self.input_responses
            .insert(name.to_string(), response.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured procedure banners as (number, name).
    pub fn banners(&self) -> &[(u32, String)] {
        &self.banners
    }

    /// Get the questions asked through `confirm`, in order.
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms_asked
    }

    /// Get the descriptions of all steps started.
    pub fn steps_started(&self) -> &[String] {
        &self.steps_started
    }

    /// Get the finish calls observed by issued status handles.
    pub fn step_finishes(&self) -> Vec<StepFinish> {
        self.step_finishes.lock().unwrap().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn procedure_banner(&mut self, number: u32, name: &str) {
        self.banners.push((number, name.to_string()));
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.confirms_asked.push(question.to_string());
        self.confirm_queue
            .pop_front()
            .ok_or_else(|| RunbookError::PromptUnavailable {
                question: question.to_string(),
                reason: "no queued answer in MockUI".to_string(),
            })
    }

    fn input(&mut self, spec: &FieldSpec) -> Result<String> {
        if let Some(response) = self.input_responses.get(&spec.name) {
            return Ok(response.clone());
        }
        if let Some(default) = &spec.default {
            return Ok(default.clone());
        }
        Ok(String::new())
    }

    fn start_step(&mut self, description: &str) -> Box<dyn StatusHandle> {
        self.steps_started.push(description.to_string());
        Box::new(MockStatus {
            finishes: Arc::clone(&self.step_finishes),
        })
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Status handle that reports finish calls back to its [`MockUI`].
#[derive(Debug)]
pub struct MockStatus {
    finishes: Arc<Mutex<Vec<StepFinish>>>,
}

impl StatusHandle for MockStatus {
    fn finish_success(&mut self, msg: &str) {
        self.finishes.lock().unwrap().push(StepFinish {
            message: msg.to_string(),
            success: true,
        });
    }

    fn finish_error(&mut self, msg: &str) {
        self.finishes.lock().unwrap().push(StepFinish {
            message: msg.to_string(),
            success: false,
        });
    }
}
