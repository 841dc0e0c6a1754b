//! Command runner port for invoking external executables.
//!
//! This port abstracts process execution from the core domain so version
//! probing and `pip freeze` parsing stay testable. The system implementation
//! lives in `scaffold-runtime`.

use std::path::Path;

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited with a success status.
    pub success: bool,
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output decoded lossily as UTF-8.
    pub stdout: String,
    /// Standard error decoded lossily as UTF-8.
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// The text a tool reported, preferring stdout.
    ///
    /// Some tools print their version banner to stderr, so an empty stdout
    /// falls back to stderr.
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Outcome of attempting to run an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process was spawned and ran to completion (successfully or not).
    Completed(CommandOutput),
    /// The executable does not exist on the search path.
    NotFound,
    /// The executable exists but could not be started.
    SpawnFailed(String),
}

/// Port for running external programs synchronously.
///
/// Implementations must not panic and must not return `Err`: every failure
/// mode is expressed as a [`CommandOutcome`] variant.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    fn run(&self, program: &Path, args: &[String]) -> CommandOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prefers_stdout() {
        let output = CommandOutput {
            stdout: "R version 4.3.2\n".to_string(),
            stderr: "warning".to_string(),
            ..CommandOutput::ok("")
        };
        assert_eq!(output.text(), "R version 4.3.2\n");
    }

    #[test]
    fn text_falls_back_to_stderr() {
        let output = CommandOutput {
            stderr: "Python 2.7.18".to_string(),
            ..CommandOutput::ok("  \n")
        };
        assert_eq!(output.text(), "Python 2.7.18");
    }
}
