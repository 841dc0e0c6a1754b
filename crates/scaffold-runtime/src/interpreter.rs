//! Python interpreter discovery.
//!
//! The interpreter is resolved once at startup. Both the session info
//! (`sys.version`) and the package inventory are answered by the same
//! interpreter, so the report and the requirements file describe one
//! environment.

use std::env;
use std::path::{Path, PathBuf};

use scaffold_core::{CommandOutcome, CommandRunner};
use tracing::{debug, warn};

#[cfg(target_os = "windows")]
pub const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Prints the interpreter's `sys.path` directories as a JSON list.
///
/// Distribution metadata is looked up along `sys.path`, so the same order
/// decides which copy of a package shadows another.
const SEARCH_PATH_SCRIPT: &str = "\
import json, os, sys
print(json.dumps([p for p in sys.path if p and os.path.isdir(p)]))";

/// Find a Python interpreter.
///
/// Resolution order: `explicit` (a path, or a name looked up on `PATH`),
/// the active virtualenv, then [`PYTHON_CANDIDATES`] on `PATH`.
pub fn find_python(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(explicit) = explicit {
        return resolve_explicit(explicit);
    }

    if let Some(venv) = env::var_os("VIRTUAL_ENV").map(PathBuf::from)
        && let Some(python) = virtualenv_python(&venv)
    {
        debug!(python = %python.display(), "Using active virtualenv interpreter");
        return Some(python);
    }

    PYTHON_CANDIDATES.iter().find_map(|candidate| {
        let found = which::which(candidate).ok();
        if let Some(path) = &found {
            debug!(candidate, python = %path.display(), "Found interpreter on PATH");
        }
        found
    })
}

fn resolve_explicit(explicit: &Path) -> Option<PathBuf> {
    if explicit.components().count() > 1 || explicit.is_absolute() {
        if explicit.is_file() {
            return Some(explicit.to_path_buf());
        }
        warn!(python = %explicit.display(), "Configured interpreter does not exist");
        return None;
    }
    match which::which(explicit) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(python = %explicit.display(), error = %e, "Configured interpreter not on PATH");
            None
        }
    }
}

/// The interpreter inside a virtualenv directory, if present.
pub fn virtualenv_python(venv: &Path) -> Option<PathBuf> {
    let candidates = if cfg!(windows) {
        vec![venv.join("Scripts").join("python.exe")]
    } else {
        let bin = venv.join("bin");
        vec![bin.join("python3"), bin.join("python")]
    };
    candidates.into_iter().find(|p| p.is_file())
}

/// Ask `python` for the directories its metadata lookup walks.
///
/// Returns an empty list when the interpreter cannot answer; the caller
/// treats that as "metadata introspection unavailable".
pub fn site_packages_dirs(runner: &dyn CommandRunner, python: &Path) -> Vec<PathBuf> {
    let args = ["-c".to_string(), SEARCH_PATH_SCRIPT.to_string()];
    let output = match runner.run(python, &args) {
        CommandOutcome::Completed(output) if output.success => output,
        other => {
            debug!(python = %python.display(), outcome = ?other, "Interpreter did not report sys.path");
            return Vec::new();
        }
    };

    parse_search_path(&output.stdout)
}

/// Parse the JSON list printed by the search-path script, keeping only
/// existing directories in their original order without repeats.
pub fn parse_search_path(stdout: &str) -> Vec<PathBuf> {
    let entries: Vec<String> = match serde_json::from_str(stdout.trim()) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(error = %e, "Unparseable sys.path reply");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = Vec::with_capacity(entries.len());
    for entry in entries {
        let dir = PathBuf::from(entry);
        if dir.is_dir() && !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}
