//! Core domain types and port definitions for scaffold.
//!
//! Everything in this crate is pure: session info assembly, dependency list
//! normalisation, README rendering and the project layout definition. Active
//! probing (processes, `sysinfo`, filesystem scans) lives in `scaffold-runtime`
//! behind the traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod layout;
pub mod paths;
pub mod ports;
pub mod report;
pub mod requirements;
pub mod services;
pub mod session;
pub mod settings;
pub mod version;

// Re-export commonly used types for convenience
pub use layout::{LayoutOptions, ProjectLayout, ScaffoldFile};
pub use paths::{PathError, ensure_directory, read_file, resolve_base_dir, write_file};
pub use ports::{
    CommandOutcome, CommandOutput, CommandRunner, HostInfoPort, InventoryError, PackageInventory,
};
pub use report::{SESSION_INFO_HEADER, render_readme};
pub use requirements::{DependencyList, Requirement};
pub use services::SessionService;
pub use session::SessionInfo;
pub use settings::{Settings, SettingsOverrides};
pub use version::{ExternalTool, VersionProbe};

#[cfg(test)]
use tempfile as _;
