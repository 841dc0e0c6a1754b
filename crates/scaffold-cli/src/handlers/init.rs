//! Init command handler.
//!
//! Writes the project layout into the target directory.

use std::path::Path;

use anyhow::{Context, Result};
use scaffold_core::{LayoutOptions, ProjectLayout, resolve_base_dir};
use scaffold_runtime::write_layout;

use crate::error::CliError;
use crate::presentation::{BLUE, BOLD, RESET, format_layout_step, print_success};

/// Execute the init command.
///
/// Existing files with the same names are overwritten.
pub fn execute(dir: Option<&Path>, options: LayoutOptions) -> Result<()> {
    let base = resolve_base_dir(dir).map_err(CliError::from)?;
    println!("{BOLD}{BLUE}Creating project under {}{RESET}\n", base.display());

    let layout = ProjectLayout::standard(options);
    write_layout(&base, &layout, |step| println!("{}", format_layout_step(step)))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to generate project in {}", base.display()))?;

    println!();
    print_success("Project setup complete.");
    Ok(())
}
