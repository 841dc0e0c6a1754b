//! Generate command handler: requirements first, then the README.

use anyhow::Result;

use super::{readme, requirements};
use crate::bootstrap::CliContext;

/// Execute the generate command.
///
/// Stops at the first failure, so a broken Python environment leaves the
/// README untouched.
pub fn execute(ctx: &CliContext) -> Result<()> {
    requirements::execute(ctx)?;
    readme::execute(ctx)
}
