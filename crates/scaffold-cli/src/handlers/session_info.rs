//! Session info command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_session_info;

/// Execute the session-info command.
///
/// Never fails on probe problems; those show up as values.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let info = ctx.session_service().collect();
    if json {
        let rendered = serde_json::to_string_pretty(&info).map_err(CliError::from)?;
        println!("{rendered}");
    } else {
        println!("{}", format_session_info(&info));
    }
    Ok(())
}
