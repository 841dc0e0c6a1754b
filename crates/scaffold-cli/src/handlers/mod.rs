//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Resolve paths from settings
//!   2. Call core services and runtime adapters
//!   3. Format output for the terminal

pub mod config;
pub mod generate;
pub mod init;
pub mod readme;
pub mod requirements;
pub mod session_info;
