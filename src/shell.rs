//! Shell command execution.
//!
//! Every step is one shell command line, run synchronously through the
//! user's shell. The caller chooses whether output is captured (for the
//! run log) or inherited by the controlling terminal (inline mode).

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Result, RunbookError};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Captured standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Exit status for failure accounting.
    ///
    /// Signal deaths carry no exit code and count as 1.
    pub fn status(&self) -> i32 {
        self.exit_code.unwrap_or(1)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory (defaults to the current directory).
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr. When false both streams are inherited by
    /// the controlling terminal.
    pub capture: bool,
}

/// Execute a shell command and wait for it to exit.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|source| RunbookError::CommandLaunch {
        command: command.to_string(),
        source,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };
    let stderr = if options.capture {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Detect the shell used to run step commands.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured() -> CommandOptions {
        CommandOptions {
            capture: true,
            ..Default::default()
        }
    }

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 1", &captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert_eq!(result.status(), 1);
    }

    #[test]
    fn execute_propagates_exit_code() {
        let result = execute("exit 7", &captured()).unwrap();

        assert_eq!(result.exit_code, Some(7));
        assert_eq!(result.status(), 7);
    }

    #[test]
    fn execute_captures_stderr() {
        let cmd = if cfg!(target_os = "windows") {
            "echo oops 1>&2"
        } else {
            "echo oops >&2"
        };
        let result = execute(cmd, &captured()).unwrap();

        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture: true,
        };

        let cmd = if cfg!(target_os = "windows") {
            "cd"
        } else {
            "pwd"
        };
        let result = execute(cmd, &options).unwrap();

        assert!(result.success);
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("echo fast", &captured()).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn status_treats_missing_exit_code_as_one() {
        let result = CommandResult {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: false,
        };
        assert_eq!(result.status(), 1);
    }
}
