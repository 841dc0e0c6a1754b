//! Requirements command handler.
//!
//! Writes one `name==version` line per installed package.

use anyhow::Result;
use scaffold_core::write_file;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_success;

/// Execute the requirements command, writing to `settings.requirements_output`.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let inventory = ctx.inventory().map_err(CliError::from)?;
    let packages = inventory.collect().map_err(CliError::from)?;
    info!(
        strategy = inventory.strategy_name(),
        count = packages.len(),
        "Collected installed packages"
    );

    let output = &ctx.settings.requirements_output;
    write_file(output, &packages.render()).map_err(CliError::from)?;
    print_success(&format!(
        "Requirements file generated at {}",
        output.display()
    ));
    Ok(())
}
