//! The run log and diagnostic tracing.
//!
//! [`RunLog`] is the append-only text sink for a run: truncated when the
//! engine starts, appended to for every executed step. Each step entry is
//! an audit line naming the acting user, host, and working directory,
//! followed by the command line and its raw output:
//!
//! ```text
//! [alice@buildhost /srv/install]# mount /dev/sda1 /mnt
//! mount: /mnt: mounted
//! ```
//!
//! Procedure banners and SUCCESS/FAIL summaries carry local timestamps.
//! Skipped procedures leave no trace here.
//!
//! Tracing is developer diagnostics only and never writes to the run log.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, RunbookError};

/// Initialize the tracing subscriber for diagnostics.
///
/// Log level is controlled by:
/// 1. `debug = true` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("runbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runbook=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

/// Append-only text sink for one run.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
    user: String,
    host: String,
    basedir: String,
}

impl RunLog {
    /// Create the run log, truncating any previous contents.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| RunbookError::LogSink {
            path: path.to_path_buf(),
            source,
        })?;

        let basedir = std::env::current_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|_| String::from("?"));

        Ok(Self {
            path: path.to_path_buf(),
            file,
            user: current_user(),
            host: current_host(),
            basedir,
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Banner for a procedure that is about to run.
    pub fn procedure_started(&mut self, number: u32, name: &str) -> Result<()> {
        let line = format!("[{}] {} started at {}", number, name, timestamp());
        self.write_line(&line)
    }

    /// SUCCESS summary for a closed procedure.
    pub fn procedure_success(&mut self, name: &str) -> Result<()> {
        let line = format!("SUCCESS: {} at {}", name, timestamp());
        self.write_line(&line)
    }

    /// FAIL summary for a closed procedure.
    pub fn procedure_failed(&mut self, name: &str, status: i32) -> Result<()> {
        let line = format!("FAIL: {} at {} (status {})", name, timestamp(), status);
        self.write_line(&line)
    }

    /// Audit line identifying who ran what, and from where.
    pub fn audit(&mut self, command: &str) -> Result<()> {
        let line = format!(
            "[{}@{} {}]# {}",
            self.user, self.host, self.basedir, command
        );
        self.write_line(&line)
    }

    /// Raw command output, appended verbatim.
    pub fn output(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.file.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.file.write_all(b"\n")?;
        }
        self.file.flush()?;
        Ok(())
    }

    /// Free-form note, e.g. when an operator forgives a failing step.
    pub fn note(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        Ok(())
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("unknown"))
}

fn current_host() -> String {
    if let Ok(name) = std::env::var("HOSTNAME") {
        if !name.is_empty() {
            return name;
        }
    }
    if let Ok(contents) = std::fs::read_to_string("/etc/hostname") {
        let name = contents.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    String::from("localhost")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn log_in(dir: &tempfile::TempDir) -> (RunLog, PathBuf) {
        let path = dir.path().join("installation.log");
        (RunLog::create(&path).unwrap(), path)
    }

    #[test]
    fn create_truncates_previous_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("installation.log");
        fs::write(&path, "stale contents\n").unwrap();

        let _log = RunLog::create(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn audit_line_has_user_host_basedir_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut log, path) = log_in(&dir);

        log.audit("mount /dev/sda1 /mnt").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("]# mount /dev/sda1 /mnt"));
        assert!(contents.contains('@'));
    }

    #[test]
    fn banner_notes_number_name_and_time() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut log, path) = log_in(&dir);

        log.procedure_started(3, "configure-network").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[3] configure-network started at"));
    }

    #[test]
    fn summaries_name_the_procedure() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut log, path) = log_in(&dir);

        log.procedure_success("copy-files").unwrap();
        log.procedure_failed("verify", 7).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("SUCCESS: copy-files at"));
        assert!(contents.contains("FAIL: verify at"));
        assert!(contents.contains("(status 7)"));
    }

    #[test]
    fn output_appends_verbatim_with_trailing_newline() {
        let dir = tempfile::TempDir::new().unwrap();
        let (mut log, path) = log_in(&dir);

        log.output("line one\nline two").unwrap();
        log.output("").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "line one\nline two\n");
    }

    #[test]
    fn create_fails_on_unwritable_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("installation.log");

        let err = RunLog::create(&path).unwrap_err();
        assert!(matches!(err, RunbookError::LogSink { .. }));
    }
}
