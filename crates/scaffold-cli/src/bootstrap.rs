//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Command runner and host probe (via scaffold-runtime)
//! - Python interpreter discovery (via scaffold-runtime)
//! - Session service (via scaffold-core)
//!
//! Command handlers receive the composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use scaffold_core::{
    CommandRunner, ExternalTool, HostInfoPort, InventoryError, PackageInventory, SessionService,
    Settings,
};
use scaffold_runtime::{SysinfoHost, SystemCommandRunner, find_python, select_inventory};
use tracing::debug;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Resolved settings (environment, then flags).
    pub settings: Settings,
    /// Runner for external programs.
    pub runner: Arc<dyn CommandRunner>,
    /// Host information provider.
    pub host: Arc<dyn HostInfoPort>,
    /// Python interpreter found at startup, if any.
    pub python: Option<PathBuf>,
}

impl CliContext {
    /// Session service over this context's ports.
    pub fn session_service(&self) -> SessionService {
        SessionService::new(
            Arc::clone(&self.host),
            Arc::clone(&self.runner),
            self.python.clone(),
            ExternalTool::r(self.settings.r_binary.clone()),
        )
    }

    /// Select the package inventory strategy for this run.
    pub fn inventory(&self) -> Result<Box<dyn PackageInventory>, InventoryError> {
        select_inventory(
            Arc::clone(&self.runner),
            self.python.as_deref(),
            &self.settings.site_packages,
        )
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the Python interpreter once and wires the system adapters.
pub fn bootstrap(settings: Settings) -> CliContext {
    let python = find_python(settings.python.as_deref());
    debug!(python = ?python, "Resolved interpreter");

    bootstrap_with(
        settings,
        Arc::new(SystemCommandRunner::new()),
        Arc::new(SysinfoHost::new()),
        python,
    )
}

/// Bootstrap with custom adapters (for testing).
pub fn bootstrap_with(
    settings: Settings,
    runner: Arc<dyn CommandRunner>,
    host: Arc<dyn HostInfoPort>,
    python: Option<PathBuf>,
) -> CliContext {
    CliContext {
        settings,
        runner,
        host,
        python,
    }
}
