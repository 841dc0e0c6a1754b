//! README rendering.

use crate::session::SessionInfo;

/// Heading of the section appended to the README template.
pub const SESSION_INFO_HEADER: &str = "## **Session Info**";

/// Append a "Session Info" section to `template`, one bullet per entry.
///
/// ```rust
/// use scaffold_core::{SessionInfo, render_readme};
///
/// let info = SessionInfo::from_pairs([("A", "1")]);
/// let readme = render_readme("X", &info);
/// assert!(readme.ends_with("## **Session Info**\n\n- **A**: 1"));
/// ```
pub fn render_readme(template: &str, info: &SessionInfo) -> String {
    let block = info
        .iter()
        .map(|(key, value)| format!("- **{key}**: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{template}\n\n{SESSION_INFO_HEADER}\n\n{block}")
}
