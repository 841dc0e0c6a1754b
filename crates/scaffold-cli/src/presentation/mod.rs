//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no probing and no filesystem access.

use scaffold_core::SessionInfo;
use scaffold_runtime::LayoutStep;

// ANSI color codes
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Format one progress line of `scaffold init`.
pub fn format_layout_step(step: &LayoutStep) -> String {
    match step {
        LayoutStep::Ensured(dir) => format!("  ↳ ensured {}", dir.display()),
        LayoutStep::Wrote(file) => format!("  ↳ wrote {}", file.display()),
    }
}

/// Format session info as aligned `label: value` rows.
pub fn format_session_info(info: &SessionInfo) -> String {
    let width = info.labels().map(str::len).max().unwrap_or(0);
    info.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a green confirmation line.
pub fn print_success(message: &str) {
    println!("{GREEN}✓{RESET} {message}");
}
