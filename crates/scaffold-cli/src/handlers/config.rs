//! Config command handler.
//!
//! Displays resolved settings in `key = value` format (or JSON), plus what
//! bootstrap derived from them.

use anyhow::Result;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the config command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let python = ctx.python.as_ref().map(|p| p.display().to_string());
    let strategy = ctx
        .inventory()
        .map(|inventory| inventory.strategy_name())
        .map_err(|e| e.to_string());

    if json {
        let settings = serde_json::to_value(&ctx.settings).map_err(CliError::from)?;
        let report = json!({
            "settings": settings,
            "resolved_python": python,
            "inventory_strategy": strategy.as_ref().ok(),
            "inventory_error": strategy.as_ref().err(),
        });
        let rendered = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", ctx.settings);
    println!("resolved_python = {}", python.as_deref().unwrap_or("(not found)"));
    match strategy {
        Ok(name) => println!("inventory_strategy = {name}"),
        Err(e) => println!("inventory_strategy = (unavailable: {e})"),
    }
    Ok(())
}
