//! Filesystem writer for [`ProjectLayout`].
//!
//! Directories are ensured first (parents before children), then files are
//! written. Existing files are overwritten. Each completed step is handed
//! to a callback so the CLI can print progress as it happens.

use std::path::{Path, PathBuf};

use scaffold_core::{PathError, ProjectLayout, ensure_directory, write_file};
use tracing::info;

/// A completed step of [`write_layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutStep {
    /// A directory now exists.
    Ensured(PathBuf),
    /// A file was written.
    Wrote(PathBuf),
}

/// Create every directory and file of `layout` under `base`.
///
/// Stops at the first filesystem error; steps already reported stay on disk.
pub fn write_layout(
    base: &Path,
    layout: &ProjectLayout,
    mut on_step: impl FnMut(&LayoutStep),
) -> Result<(), PathError> {
    ensure_directory(base)?;

    for dir in layout.directories_under(base) {
        ensure_directory(&dir)?;
        info!(dir = %dir.display(), "Ensured directory");
        on_step(&LayoutStep::Ensured(dir));
    }

    for file in &layout.files {
        let path = base.join(&file.relative_path);
        write_file(&path, file.contents)?;
        info!(file = %path.display(), bytes = file.contents.len(), "Wrote file");
        on_step(&LayoutStep::Wrote(path));
    }

    Ok(())
}
