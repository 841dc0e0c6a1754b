//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use scaffold_core::SettingsOverrides;

use crate::commands::Commands;

/// Command-line interface definition for the project scaffolding tool.
///
/// Global options override the matching `SCAFFOLD_*` environment variables.
#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Generate a data-science project layout and its session README")]
#[command(version)]
pub struct Cli {
    /// Python interpreter to report on and take packages from
    #[arg(long, global = true)]
    pub python: Option<PathBuf>,

    /// R executable probed for the session info
    #[arg(long = "r-binary", global = true)]
    pub r_binary: Option<PathBuf>,

    /// Site-packages directory to scan instead of asking the interpreter (repeatable)
    #[arg(long = "site-packages", global = true, action = ArgAction::Append)]
    pub site_packages: Vec<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Global flags as settings overrides.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            python: self.python.clone(),
            r_binary: self.r_binary.clone(),
            site_packages: self.site_packages.clone(),
            ..SettingsOverrides::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "scaffold",
            "--verbose",
            "requirements",
            "--site-packages",
            "/venv/a",
            "--site-packages",
            "/venv/b",
            "--r-binary",
            "R-4.3",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.site_packages.len(), 2);

        let overrides = cli.overrides();
        assert_eq!(overrides.r_binary, Some(PathBuf::from("R-4.3")));
        assert!(overrides.python.is_none());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["scaffold"]);
        assert!(cli.command.is_none());
    }
}
