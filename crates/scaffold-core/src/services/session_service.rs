//! Session info collection.
//!
//! Combines the host port, the Python interpreter and the R version probe
//! into a [`SessionInfo`]. Collection never fails: every probe failure is
//! folded into an informational value.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::ports::{CommandOutcome, CommandRunner, HostInfoPort};
use crate::session::{self, SessionInfo};
use crate::version::{ExternalTool, VersionProbe, describe_exit};

/// Value substituted when the host answers with an empty string.
pub const UNKNOWN: &str = "unknown";

/// Architecture reported when the host port gives nothing back.
pub const ARCHITECTURE_FALLBACK: &str = std::env::consts::ARCH;

/// Script passed to the interpreter with `-c` to print its full version.
pub const PYTHON_VERSION_SCRIPT: &str = "import sys; print(sys.version)";

/// Collects [`SessionInfo`] snapshots.
pub struct SessionService {
    host: Arc<dyn HostInfoPort>,
    runner: Arc<dyn CommandRunner>,
    python: Option<PathBuf>,
    r_tool: ExternalTool,
}

impl SessionService {
    /// Create a session service.
    ///
    /// `python` is the resolved interpreter, `None` when discovery found none.
    pub fn new(
        host: Arc<dyn HostInfoPort>,
        runner: Arc<dyn CommandRunner>,
        python: Option<PathBuf>,
        r_tool: ExternalTool,
    ) -> Self {
        Self {
            host,
            runner,
            python,
            r_tool,
        }
    }

    /// Collect a snapshot stamped with the current local time.
    pub fn collect(&self) -> SessionInfo {
        self.collect_at(Local::now().naive_local())
    }

    /// Collect a snapshot stamped with `now`.
    pub fn collect_at(&self, now: NaiveDateTime) -> SessionInfo {
        let r_version = self.r_tool.probe(self.runner.as_ref());
        match r_version.version() {
            Some(version) => debug!(tool = %self.r_tool.name, version, "Parsed tool version"),
            None => warn!(tool = %self.r_tool.name, result = %r_version, "Version probe degraded"),
        }

        SessionInfo::from_pairs([
            (session::PYTHON_VERSION, self.python_version()),
            (session::PLATFORM, non_empty(self.host.platform(), UNKNOWN)),
            (session::OS, non_empty(self.host.os_name(), UNKNOWN)),
            (
                session::ARCHITECTURE,
                non_empty(self.host.architecture(), ARCHITECTURE_FALLBACK),
            ),
            (
                session::PROCESSOR,
                non_empty(self.host.processor(), ARCHITECTURE_FALLBACK),
            ),
            (
                session::GENERATED_ON,
                now.format(session::TIMESTAMP_FORMAT).to_string(),
            ),
            (session::R_VERSION, r_version.to_string()),
        ])
    }

    /// Ask the interpreter for `sys.version`, collapsing newlines to spaces.
    fn python_version(&self) -> String {
        let Some(python) = &self.python else {
            return VersionProbe::NotInstalled {
                tool: "Python".to_string(),
            }
            .to_string();
        };

        let args = ["-c".to_string(), PYTHON_VERSION_SCRIPT.to_string()];
        let failure = |message: String| {
            VersionProbe::Failed {
                tool: "Python".to_string(),
                message,
            }
            .to_string()
        };

        match self.runner.run(python, &args) {
            CommandOutcome::Completed(output) if output.success => {
                let version = collapse_newlines(output.text());
                debug!(python = %python.display(), %version, "Python version");
                if version.is_empty() {
                    failure("empty version output".to_string())
                } else {
                    version
                }
            }
            CommandOutcome::Completed(output) => failure(describe_exit(python, &args, &output)),
            CommandOutcome::NotFound => VersionProbe::NotInstalled {
                tool: "Python".to_string(),
            }
            .to_string(),
            CommandOutcome::SpawnFailed(reason) => failure(reason),
        }
    }
}

fn collapse_newlines(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ports::{CommandOutput, MockCommandRunner};

    struct FixedHost {
        processor: String,
    }

    impl HostInfoPort for FixedHost {
        fn platform(&self) -> String {
            "Linux-6.8.0-x86_64-with-glibc2.39".to_string()
        }

        fn os_name(&self) -> String {
            "Linux".to_string()
        }

        fn architecture(&self) -> String {
            "64bit".to_string()
        }

        fn processor(&self) -> String {
            self.processor.clone()
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(12, 5, 7)
            .unwrap()
    }

    fn service(runner: MockCommandRunner, python: Option<&str>, processor: &str) -> SessionService {
        SessionService::new(
            Arc::new(FixedHost {
                processor: processor.to_string(),
            }),
            Arc::new(runner),
            python.map(PathBuf::from),
            ExternalTool::r("R"),
        )
    }

    #[test]
    fn collects_every_label_in_order() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, _| program.as_os_str() == "/usr/bin/python3")
            .return_const(CommandOutcome::Completed(CommandOutput::ok(
                "3.12.3 (main, Feb  4 2025, 14:48:35)\n[GCC 13.3.0]\n",
            )));
        runner
            .expect_run()
            .withf(|program, _| program.as_os_str() == "R")
            .return_const(CommandOutcome::Completed(CommandOutput::ok(
                "R version 4.3.3 (2024-02-29) -- \"Angel Food Cake\"\n",
            )));

        let info = service(runner, Some("/usr/bin/python3"), "x86_64").collect_at(noon());

        assert_eq!(info.labels().collect::<Vec<_>>(), session::LABELS);
        assert!(info.iter().all(|(_, value)| !value.is_empty()));
        assert_eq!(
            info.get(session::PYTHON_VERSION),
            Some("3.12.3 (main, Feb  4 2025, 14:48:35) [GCC 13.3.0]")
        );
        assert_eq!(info.get(session::GENERATED_ON), Some("2024-03-09 12:05:07"));
        assert_eq!(
            info.get(session::R_VERSION),
            Some("R version 4.3.3 (2024-02-29) -- \"Angel Food Cake\" (parsed: 4.3.3)")
        );
    }

    #[test]
    fn absent_tools_degrade_to_messages() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .return_const(CommandOutcome::NotFound);

        let info = service(runner, None, "").collect_at(noon());

        assert_eq!(
            info.get(session::R_VERSION),
            Some("R is not installed or not found in PATH.")
        );
        assert_eq!(
            info.get(session::PYTHON_VERSION),
            Some("Python is not installed or not found in PATH.")
        );
        assert_eq!(info.get(session::PROCESSOR), Some(ARCHITECTURE_FALLBACK));
    }

    #[test]
    fn failing_python_is_reported_inline() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, _| program.as_os_str() == "/opt/py/bin/python")
            .return_const(CommandOutcome::Completed(CommandOutput::failed(
                127,
                "error while loading shared libraries\n",
            )));
        runner
            .expect_run()
            .withf(|program, _| program.as_os_str() == "R")
            .return_const(CommandOutcome::NotFound);

        let info = service(runner, Some("/opt/py/bin/python"), "arm").collect_at(noon());

        let python = info.get(session::PYTHON_VERSION).unwrap();
        assert!(python.starts_with("Error calling Python: Command '/opt/py/bin/python -c"));
        assert!(python.ends_with("returned non-zero exit status 127: error while loading shared libraries"));
    }
}
