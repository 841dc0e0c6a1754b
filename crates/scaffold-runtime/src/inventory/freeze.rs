//! `pip freeze` fallback.

use std::path::PathBuf;
use std::sync::Arc;

use scaffold_core::requirements::parse_freeze_output;
use scaffold_core::{CommandOutcome, CommandRunner, DependencyList, InventoryError, PackageInventory};
use tracing::debug;

/// Inventory that runs `<python> -m pip freeze` and parses the pins.
pub struct FreezeInventory {
    runner: Arc<dyn CommandRunner>,
    python: PathBuf,
}

impl FreezeInventory {
    pub fn new(runner: Arc<dyn CommandRunner>, python: PathBuf) -> Self {
        Self { runner, python }
    }

    fn command_line(&self) -> String {
        format!("{} -m pip freeze", self.python.display())
    }
}

impl PackageInventory for FreezeInventory {
    fn strategy_name(&self) -> &'static str {
        "pip-freeze"
    }

    fn collect(&self) -> Result<DependencyList, InventoryError> {
        let args = ["-m", "pip", "freeze"].map(String::from);
        let output = match self.runner.run(&self.python, &args) {
            CommandOutcome::Completed(output) if output.success => output,
            CommandOutcome::Completed(output) => {
                let detail = output
                    .stderr
                    .lines()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .unwrap_or("no error output")
                    .to_string();
                return Err(InventoryError::CommandFailed {
                    command: self.command_line(),
                    reason: match output.code {
                        Some(code) => format!("exit status {code}: {detail}"),
                        None => format!("terminated by a signal: {detail}"),
                    },
                });
            }
            CommandOutcome::NotFound => {
                return Err(InventoryError::InterpreterNotFound {
                    tried: self.python.display().to_string(),
                });
            }
            CommandOutcome::SpawnFailed(reason) => {
                return Err(InventoryError::CommandFailed {
                    command: self.command_line(),
                    reason,
                });
            }
        };

        let packages = parse_freeze_output(&output.stdout);
        debug!(count = packages.len(), "Parsed freeze output");
        Ok(DependencyList::from_packages(packages))
    }
}
