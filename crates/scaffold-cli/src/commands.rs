//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;
use scaffold_core::SettingsOverrides;

/// Available commands for the project scaffolding tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project folders and boilerplate files
    Init {
        /// Directory to generate into (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Also write generate_readme_info.py for machines without scaffold
        #[arg(long)]
        python_helper: bool,
    },

    /// Print the session info for this machine
    SessionInfo {
        /// Print as a JSON object instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Write the pinned dependency list of the Python environment
    Requirements {
        /// Output file (default: requirements.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the README template with a session info section appended
    Readme {
        /// README template to read (default: README_template.md)
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Output file (default: README.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the requirements file and then the README
    Generate {
        /// README template to read (default: README_template.md)
        #[arg(long)]
        template: Option<PathBuf>,
        /// Requirements output file (default: requirements.txt)
        #[arg(long)]
        requirements: Option<PathBuf>,
        /// README output file (default: README.md)
        #[arg(long)]
        readme: Option<PathBuf>,
    },

    /// Show resolved settings, interpreter and inventory strategy
    Config {
        /// Print as a JSON object instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Command-specific settings overrides.
    pub fn overrides(&self) -> SettingsOverrides {
        match self {
            Self::Requirements { output } => SettingsOverrides {
                requirements_output: output.clone(),
                ..SettingsOverrides::default()
            },
            Self::Readme { template, output } => SettingsOverrides {
                template: template.clone(),
                readme_output: output.clone(),
                ..SettingsOverrides::default()
            },
            Self::Generate {
                template,
                requirements,
                readme,
            } => SettingsOverrides {
                template: template.clone(),
                requirements_output: requirements.clone(),
                readme_output: readme.clone(),
                ..SettingsOverrides::default()
            },
            Self::Init { .. } | Self::SessionInfo { .. } | Self::Config { .. } => {
                SettingsOverrides::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn generate_maps_all_output_flags() {
        let cli = Cli::parse_from([
            "scaffold",
            "generate",
            "--template",
            "docs/TEMPLATE.md",
            "--readme",
            "docs/README.md",
        ]);
        let overrides = cli.command.unwrap().overrides();

        assert_eq!(overrides.template, Some(PathBuf::from("docs/TEMPLATE.md")));
        assert_eq!(overrides.readme_output, Some(PathBuf::from("docs/README.md")));
        assert!(overrides.requirements_output.is_none());
    }

    #[test]
    fn init_takes_optional_directory() {
        let cli = Cli::parse_from(["scaffold", "init", "analysis", "--python-helper"]);
        match cli.command {
            Some(Commands::Init { dir, python_helper }) => {
                assert_eq!(dir, Some(PathBuf::from("analysis")));
                assert!(python_helper);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_accepts_json_flag() {
        let cli = Cli::parse_from(["scaffold", "config", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Config { json: true })));
    }
}
