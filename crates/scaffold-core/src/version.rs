//! Version probing for external interpreters.
//!
//! A probe runs `<program> --version`, keeps the first output line and takes
//! the third whitespace-separated token as the version (`R version 4.3.2 (...)`
//! parses to `4.3.2`). The token position is a known fragility: output that
//! does not fit degrades to [`VersionProbe::Failed`] instead of panicking.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ports::{CommandOutcome, CommandOutput, CommandRunner};

/// Zero-based index of the version token in the first output line.
const VERSION_TOKEN_INDEX: usize = 2;

/// An external executable whose version is reported in the session info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    /// Display name used in fallback messages (e.g. `R`).
    pub name: String,
    /// Program to run: a bare name searched on `PATH`, or an explicit path.
    pub program: PathBuf,
    /// Argument that makes the tool print its version.
    pub version_flag: String,
}

impl ExternalTool {
    /// Create a tool probed with `--version`.
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            version_flag: "--version".to_string(),
        }
    }

    /// The R interpreter found under `program`.
    pub fn r(program: impl Into<PathBuf>) -> Self {
        Self::new("R", program)
    }

    /// Run the version probe through `runner`.
    pub fn probe(&self, runner: &dyn CommandRunner) -> VersionProbe {
        let args = [self.version_flag.clone()];
        match runner.run(&self.program, &args) {
            CommandOutcome::Completed(output) if output.success => {
                match parse_version_line(output.text()) {
                    Some((first_line, version)) => VersionProbe::Parsed {
                        first_line,
                        version,
                    },
                    None => VersionProbe::Failed {
                        tool: self.name.clone(),
                        message: format!(
                            "unexpected version output {:?}",
                            output.text().lines().next().unwrap_or_default().trim()
                        ),
                    },
                }
            }
            CommandOutcome::Completed(output) => VersionProbe::Failed {
                tool: self.name.clone(),
                message: describe_exit(&self.program, &args, &output),
            },
            CommandOutcome::NotFound => VersionProbe::NotInstalled {
                tool: self.name.clone(),
            },
            CommandOutcome::SpawnFailed(reason) => VersionProbe::Failed {
                tool: self.name.clone(),
                message: reason,
            },
        }
    }
}

/// Tagged result of a version probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionProbe {
    /// The tool ran and its first line carried a version token.
    Parsed { first_line: String, version: String },
    /// The tool is not on the search path.
    NotInstalled { tool: String },
    /// The tool ran but failed, or its output could not be parsed.
    Failed { tool: String, message: String },
}

impl VersionProbe {
    /// The parsed version token, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Parsed { version, .. } => Some(version),
            _ => None,
        }
    }
}

impl fmt::Display for VersionProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed {
                first_line,
                version,
            } => write!(f, "{first_line} (parsed: {version})"),
            Self::NotInstalled { tool } => {
                write!(f, "{tool} is not installed or not found in PATH.")
            }
            Self::Failed { tool, message } => write!(f, "Error calling {tool}: {message}"),
        }
    }
}

/// Split the first non-empty line of `text` and pick the version token.
///
/// Returns `(first_line, version)` or `None` when the line has too few tokens.
pub fn parse_version_line(text: &str) -> Option<(String, String)> {
    let first_line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let version = first_line.split_whitespace().nth(VERSION_TOKEN_INDEX)?;
    Some((first_line.to_string(), version.to_string()))
}

/// Describe a non-zero exit in the style of a failed subprocess call.
pub(crate) fn describe_exit(program: &Path, args: &[String], output: &CommandOutput) -> String {
    let command = std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");
    let status = output.code.map_or_else(
        || "was terminated by a signal".to_string(),
        |code| format!("returned non-zero exit status {code}"),
    );
    match output.stderr.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(detail) => format!("Command '{command}' {status}: {detail}"),
        None => format!("Command '{command}' {status}."),
    }
}
