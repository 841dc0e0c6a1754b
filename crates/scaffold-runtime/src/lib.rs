//! Process runtime and OS-level concerns for scaffold.
//!
//! Implements the ports declared in `scaffold-core`:
//! - [`SystemCommandRunner`] runs external programs with `std::process`
//! - [`SysinfoHost`] answers host questions through `sysinfo`
//! - [`inventory`] provides the two package inventory strategies
//! - [`layout`] writes a [`scaffold_core::ProjectLayout`] to disk

#![deny(unsafe_code)]

mod command;
mod host;
pub mod interpreter;
pub mod inventory;
pub mod layout;

pub use command::SystemCommandRunner;
pub use host::SysinfoHost;
pub use interpreter::{PYTHON_CANDIDATES, find_python, site_packages_dirs};
pub use inventory::{FreezeInventory, MetadataInventory, select_inventory};
pub use layout::{LayoutStep, write_layout};
