//! Path utilities for the generated project tree.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters report progress themselves

mod error;
mod io;

use std::env;
use std::path::{Path, PathBuf};

pub use error::PathError;
pub use io::{ensure_directory, read_file, write_file};

/// Resolve the directory a project is generated into.
///
/// An explicit directory is used as given (relative paths are joined onto
/// the current directory); otherwise the current directory is used.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(path) if path.as_os_str().is_empty() => Err(PathError::EmptyPath),
        Some(path) if path.is_absolute() => Ok(path.to_path_buf()),
        Some(path) => Ok(current_dir()?.join(path)),
        None => current_dir(),
    }
}

fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
