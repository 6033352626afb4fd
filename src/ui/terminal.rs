//! Interactive terminal UI.

use std::io::Write;

use console::Term;

use crate::error::Result;

use super::prompts::{confirm_on, input_on};
use super::{
    should_use_colors, FieldSpec, NonInteractiveUI, RunbookTheme, StatusHandle, StepSpinner,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: RunbookTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            RunbookTheme::new()
        } else {
            RunbookTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn procedure_banner(&mut self, number: u32, name: &str) {
        writeln!(self.term, "\n{}", self.theme.format_banner(number, name)).ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        confirm_on(question, &self.term)
    }

    fn input(&mut self, spec: &FieldSpec) -> Result<String> {
        input_on(spec, &self.term)
    }

    fn start_step(&mut self, description: &str) -> Box<dyn StatusHandle> {
        Box::new(StepSpinner::new(description))
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false);
        assert!(!ui.is_interactive());
    }
}
