//! Live single-line step status.
//!
//! While a step runs, the display shows a pending mark and the step
//! description; when the command exits, the same line is overwritten with
//! the outcome mark. Inline-output runs bypass this entirely; the
//! command's own output is the feedback.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::RunbookTheme;
use super::StatusHandle;

/// Spinner-backed status line for interactive terminals.
pub struct StepSpinner {
    bar: ProgressBar,
    theme: RunbookTheme,
}

impl StepSpinner {
    /// Create a new status line with a pending mark and message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: RunbookTheme::new(),
        }
    }

    /// Create a status line that doesn't show (hidden display).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: RunbookTheme::plain(),
        }
    }
}

impl StatusHandle for StepSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar
            .finish_with_message(self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(self.theme.format_error(msg));
    }
}

/// Status reporting for non-TTY output: no pending line, one plain line
/// per finished step.
pub struct PlainStatus;

impl StatusHandle for PlainStatus {
    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        println!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes_quietly() {
        let mut status = StepSpinner::hidden();
        status.finish_success("done");
    }

    #[test]
    fn hidden_spinner_error_path() {
        let mut status = StepSpinner::hidden();
        status.finish_error("failed");
    }

    #[test]
    fn plain_status_implements_handle() {
        let mut status = PlainStatus;
        status.finish_success("done");
        status.finish_error("failed");
    }
}
