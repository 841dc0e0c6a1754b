//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `std::process` or `sysinfo` types in any signature
//! - Probing ports never fail: failures are folded into domain values
//! - Inventory strategies return typed errors, the caller decides

pub mod command_runner;
pub mod host_info;
pub mod package_inventory;

pub use command_runner::{CommandOutcome, CommandOutput, CommandRunner};
pub use host_info::HostInfoPort;
pub use package_inventory::{InventoryError, PackageInventory};
#[cfg(test)]
pub use command_runner::MockCommandRunner;
