//! Settings domain types and resolution.
//!
//! Settings come from environment variables (a `.env` file is loaded by the
//! CLI before resolution) and are then overridden by command-line flags.
//! Resolution takes a lookup function so tests never touch the process
//! environment.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Environment variable naming an explicit Python interpreter.
pub const ENV_PYTHON: &str = "SCAFFOLD_PYTHON";
/// Environment variable naming the R executable.
pub const ENV_R_BINARY: &str = "SCAFFOLD_R_BINARY";
/// Environment variable listing site-packages directories (platform path list).
pub const ENV_SITE_PACKAGES: &str = "SCAFFOLD_SITE_PACKAGES";
/// Environment variable naming the README template.
pub const ENV_TEMPLATE: &str = "SCAFFOLD_TEMPLATE";
/// Environment variable naming the requirements output file.
pub const ENV_REQUIREMENTS: &str = "SCAFFOLD_REQUIREMENTS";
/// Environment variable naming the README output file.
pub const ENV_README: &str = "SCAFFOLD_README";

pub const DEFAULT_R_BINARY: &str = "R";
pub const DEFAULT_TEMPLATE: &str = "README_template.md";
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
pub const DEFAULT_README: &str = "README.md";

/// Resolved application settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Explicit Python interpreter; discovered on `PATH` when unset.
    pub python: Option<PathBuf>,
    /// R executable name or path.
    pub r_binary: PathBuf,
    /// Site-packages directories to scan instead of asking the interpreter.
    pub site_packages: Vec<PathBuf>,
    /// README template read by `readme` and `generate`.
    pub template: PathBuf,
    /// Requirements file written by `requirements` and `generate`.
    pub requirements_output: PathBuf,
    /// README written by `readme` and `generate`.
    pub readme_output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: None,
            r_binary: PathBuf::from(DEFAULT_R_BINARY),
            site_packages: Vec::new(),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            requirements_output: PathBuf::from(DEFAULT_REQUIREMENTS),
            readme_output: PathBuf::from(DEFAULT_README),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        Self {
            python: get(ENV_PYTHON).map(PathBuf::from),
            r_binary: get(ENV_R_BINARY).map_or(defaults.r_binary, PathBuf::from),
            site_packages: get(ENV_SITE_PACKAGES)
                .map(|value| {
                    env::split_paths(&value)
                        .filter(|p| !p.as_os_str().is_empty())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            template: get(ENV_TEMPLATE).map_or(defaults.template, PathBuf::from),
            requirements_output: get(ENV_REQUIREMENTS)
                .map_or(defaults.requirements_output, PathBuf::from),
            readme_output: get(ENV_README).map_or(defaults.readme_output, PathBuf::from),
        }
    }

    /// Apply command-line overrides, only touching fields that are `Some`.
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(python) = overrides.python {
            self.python = Some(python);
        }
        if let Some(r_binary) = overrides.r_binary {
            self.r_binary = r_binary;
        }
        if !overrides.site_packages.is_empty() {
            self.site_packages = overrides.site_packages;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(path) = overrides.requirements_output {
            self.requirements_output = path;
        }
        if let Some(path) = overrides.readme_output {
            self.readme_output = path;
        }
    }
}

/// Partial settings supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub python: Option<PathBuf>,
    pub r_binary: Option<PathBuf>,
    pub site_packages: Vec<PathBuf>,
    pub template: Option<PathBuf>,
    pub requirements_output: Option<PathBuf>,
    pub readme_output: Option<PathBuf>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let python = self
            .python
            .as_ref()
            .map_or_else(|| "(discover on PATH)".to_string(), |p| p.display().to_string());
        let site_packages = if self.site_packages.is_empty() {
            "(ask interpreter)".to_string()
        } else {
            self.site_packages
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(f, "python = {python}")?;
        writeln!(f, "r_binary = {}", self.r_binary.display())?;
        writeln!(f, "site_packages = {site_packages}")?;
        writeln!(f, "template = {}", self.template.display())?;
        writeln!(
            f,
            "requirements_output = {}",
            self.requirements_output.display()
        )?;
        write!(f, "readme_output = {}", self.readme_output.display())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), OsString::from(v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.r_binary, PathBuf::from("R"));
        assert!(settings.python.is_none());
    }

    #[test]
    fn reads_environment_values() {
        let joined = env::join_paths(["/srv/venv/site-packages", "/usr/lib/python3/dist-packages"])
            .unwrap();
        let joined = joined.to_string_lossy().into_owned();
        let settings = Settings::from_lookup(lookup(&[
            (ENV_PYTHON, "/srv/venv/bin/python"),
            (ENV_R_BINARY, "/opt/R/bin/R"),
            (ENV_SITE_PACKAGES, &joined),
            (ENV_TEMPLATE, ""),
        ]));

        assert_eq!(settings.python, Some(PathBuf::from("/srv/venv/bin/python")));
        assert_eq!(settings.r_binary, PathBuf::from("/opt/R/bin/R"));
        assert_eq!(settings.site_packages.len(), 2);
        assert_eq!(settings.template, PathBuf::from(DEFAULT_TEMPLATE));
    }

    #[test]
    fn overrides_win_over_environment() {
        let mut settings = Settings::from_lookup(lookup(&[(ENV_R_BINARY, "R-devel")]));
        settings.apply(SettingsOverrides {
            r_binary: Some(PathBuf::from("R")),
            readme_output: Some(PathBuf::from("docs/README.md")),
            ..SettingsOverrides::default()
        });

        assert_eq!(settings.r_binary, PathBuf::from("R"));
        assert_eq!(settings.readme_output, PathBuf::from("docs/README.md"));
        assert_eq!(settings.requirements_output, PathBuf::from(DEFAULT_REQUIREMENTS));
    }

    #[test]
    fn display_is_key_value_lines() {
        let output = Settings::default().to_string();
        assert!(output.starts_with("python = (discover on PATH)\n"));
        assert!(output.contains("r_binary = R\n"));
        assert!(output.ends_with("readme_output = README.md"));
    }

    #[test]
    fn serializes_with_field_names() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(value["r_binary"], "R");
        assert_eq!(value["requirements_output"], "requirements.txt");
        assert!(value["python"].is_null());
    }
}
