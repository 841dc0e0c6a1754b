//! Package inventory strategies and their selection.
//!
//! [`MetadataInventory`] reads distribution metadata straight from disk;
//! [`FreezeInventory`] asks pip. [`select_inventory`] picks one at startup
//! based on what the environment can offer.

mod freeze;
mod metadata;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use scaffold_core::{CommandRunner, InventoryError, PackageInventory};
use tracing::{debug, info};

pub use freeze::FreezeInventory;
pub use metadata::MetadataInventory;

use crate::interpreter::{PYTHON_CANDIDATES, site_packages_dirs};

/// Choose the inventory strategy for this run.
///
/// 1. Explicitly configured site directories → metadata scan over them.
/// 2. An interpreter that reports existing `sys.path` directories → metadata scan.
/// 3. An interpreter that cannot → `pip freeze`.
/// 4. No interpreter → [`InventoryError::InterpreterNotFound`].
pub fn select_inventory(
    runner: Arc<dyn CommandRunner>,
    python: Option<&Path>,
    configured_dirs: &[PathBuf],
) -> Result<Box<dyn PackageInventory>, InventoryError> {
    if !configured_dirs.is_empty() {
        debug!(dirs = ?configured_dirs, "Using configured site-packages directories");
        return Ok(Box::new(MetadataInventory::new(configured_dirs.to_vec())));
    }

    let Some(python) = python else {
        return Err(InventoryError::InterpreterNotFound {
            tried: PYTHON_CANDIDATES.join(", "),
        });
    };

    let dirs = site_packages_dirs(runner.as_ref(), python);
    let inventory: Box<dyn PackageInventory> = if dirs.is_empty() {
        Box::new(FreezeInventory::new(runner, python.to_path_buf()))
    } else {
        Box::new(MetadataInventory::new(dirs))
    };
    info!(strategy = inventory.strategy_name(), "Selected package inventory");
    Ok(inventory)
}
