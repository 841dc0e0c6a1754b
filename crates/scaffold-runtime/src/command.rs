//! System command execution.
//!
//! Runs a program to completion and captures its output. A missing
//! executable is reported as [`CommandOutcome::NotFound`] rather than an
//! error so version probes can degrade gracefully.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use scaffold_core::{CommandOutcome, CommandOutput, CommandRunner};
use tracing::debug;

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> CommandOutcome {
        debug!(program = %program.display(), ?args, "Running command");

        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(program = %program.display(), "Command not found");
                return CommandOutcome::NotFound;
            }
            Err(e) => return CommandOutcome::SpawnFailed(e.to_string()),
        };

        let captured = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            program = %program.display(),
            code = ?captured.code,
            "Command finished"
        );
        CommandOutcome::Completed(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let outcome = SystemCommandRunner::new().run(Path::new("scaffold-no-such-tool-12345"), &[]);
        assert_eq!(outcome, CommandOutcome::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_status() {
        let runner = SystemCommandRunner::new();

        let ok = runner.run(Path::new("sh"), &["-c".to_string(), "echo hello".to_string()]);
        let failed = runner.run(
            Path::new("sh"),
            &["-c".to_string(), "echo oops >&2; exit 3".to_string()],
        );

        assert_eq!(ok, CommandOutcome::Completed(CommandOutput::ok("hello\n")));
        assert_eq!(
            failed,
            CommandOutcome::Completed(CommandOutput::failed(3, "oops\n"))
        );
    }
}
