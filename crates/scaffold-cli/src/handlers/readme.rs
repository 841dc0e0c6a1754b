//! README command handler.

use anyhow::Result;
use scaffold_core::{read_file, render_readme, write_file};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_success;

/// Execute the readme command.
///
/// A missing template is fatal; the README is only written once the
/// template has been read.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let template = read_file(&ctx.settings.template).map_err(CliError::from)?;
    let info = ctx.session_service().collect();

    let output = &ctx.settings.readme_output;
    write_file(output, &render_readme(&template, &info)).map_err(CliError::from)?;
    print_success(&format!("README file generated at {}", output.display()));
    Ok(())
}
