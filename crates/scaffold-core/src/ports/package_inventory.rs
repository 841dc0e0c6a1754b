//! Package inventory port.
//!
//! Two strategies implement this in `scaffold-runtime`: a metadata scan of
//! site-packages directories and a `pip freeze` fallback. Which one is used
//! is decided once at startup, never per call.

use thiserror::Error;

use crate::requirements::DependencyList;

/// Errors that can occur while enumerating installed packages.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No Python interpreter was found and no site directories were configured.
    #[error("Python not found in PATH (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// The package manager could not be run or exited unsuccessfully.
    #[error("Failed to run {command}: {reason}")]
    CommandFailed { command: String, reason: String },
}

/// A strategy for listing the packages installed in a Python environment.
pub trait PackageInventory: Send + Sync {
    /// Short strategy name used in logs and `scaffold config` output.
    fn strategy_name(&self) -> &'static str;

    /// Enumerate installed packages as a sorted, de-duplicated list.
    fn collect(&self) -> Result<DependencyList, InventoryError>;
}
