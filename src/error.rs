//! Error types for runbook operations.
//!
//! This module defines [`RunbookError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! Engine-internal failures (log file cannot be opened, a command cannot be
//! spawned, a prompt cannot be shown) are errors. A *step* exiting nonzero
//! is not an error: that is run-control, handled by the engine's
//! failure-recovery policy.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runbook operations.
#[derive(Debug, Error)]
pub enum RunbookError {
    /// The run log could not be created or written.
    #[error("cannot open run log {path}: {source}")]
    LogSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A step command could not be launched at all.
    #[error("failed to launch command `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A prompt was needed but the UI cannot ask one.
    #[error("cannot prompt for '{question}': {reason}")]
    PromptUnavailable { question: String, reason: String },

    /// A required input field was left empty.
    #[error("field '{name}' is required")]
    FieldRequired { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runbook operations.
pub type Result<T> = std::result::Result<T, RunbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_displays_path() {
        let err = RunbookError::LogSink {
            path: PathBuf::from("/var/log/install.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/var/log/install.log"));
    }

    #[test]
    fn command_launch_displays_command() {
        let err = RunbookError::CommandLaunch {
            command: "mount /dev/sda1 /mnt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("mount /dev/sda1 /mnt"));
    }

    #[test]
    fn prompt_unavailable_displays_question_and_reason() {
        let err = RunbookError::PromptUnavailable {
            question: "ignore and continue?".into(),
            reason: "non-interactive run".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ignore and continue?"));
        assert!(msg.contains("non-interactive"));
    }

    #[test]
    fn field_required_displays_name() {
        let err = RunbookError::FieldRequired {
            name: "target_disk".into(),
        };
        assert!(err.to_string().contains("target_disk"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RunbookError = io_err.into();
        assert!(matches!(err, RunbookError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RunbookError::FieldRequired { name: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}
