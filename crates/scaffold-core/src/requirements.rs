//! Pinned dependency list and the parsers that feed it.
//!
//! Both inventory strategies funnel their raw findings through
//! [`DependencyList::from_packages`], which is the only place ordering and
//! de-duplication happen.

use std::fmt;

use tracing::debug;

/// A single installed package pinned to its version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

impl Requirement {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}

/// Installed packages sorted case-insensitively by name, no duplicate names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyList {
    packages: Vec<Requirement>,
}

impl DependencyList {
    /// Sort `packages` case-insensitively and drop case-insensitive duplicates.
    ///
    /// The sort is stable, so when two entries share a name the one seen
    /// first is kept. Inventory strategies rely on this to let earlier
    /// site directories shadow later ones.
    pub fn from_packages(packages: impl IntoIterator<Item = Requirement>) -> Self {
        let mut packages: Vec<Requirement> = packages.into_iter().collect();
        packages.sort_by_cached_key(Requirement::sort_key);
        packages.dedup_by(|later, kept| {
            let duplicate = later.sort_key() == kept.sort_key();
            if duplicate {
                debug!(kept = %kept, shadowed = %later, "Dropping duplicate package");
            }
            duplicate
        });
        Self { packages }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Render as a requirements file: one `name==version` line per package.
    pub fn render(&self) -> String {
        self.packages
            .iter()
            .map(|req| format!("{req}\n"))
            .collect()
    }
}

/// Parse one line of `pip freeze` output.
///
/// Only `name==version` pins are accepted. Comments, option lines such as
/// `-e`, and direct references (`name @ url`) yield `None`.
pub fn parse_freeze_line(line: &str) -> Option<Requirement> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let (name, version) = line.split_once("==")?;
    let (name, version) = (name.trim(), version.trim());
    if name.is_empty() || version.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(Requirement::new(name, version))
}

/// Parse full `pip freeze` output, logging every skipped line.
pub fn parse_freeze_output(text: &str) -> Vec<Requirement> {
    text.lines()
        .filter_map(|line| {
            let parsed = parse_freeze_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                debug!(line, "Skipping unpinned freeze line");
            }
            parsed
        })
        .collect()
}

/// Extract `Name` and `Version` from a core metadata file
/// (`METADATA` in a `.dist-info`, `PKG-INFO` in an `.egg-info`).
///
/// Only the header block is read; it ends at the first blank line.
pub fn parse_core_metadata(text: &str) -> Option<Requirement> {
    let mut name = None;
    let mut version = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Name:") {
            name.get_or_insert_with(|| value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Version:") {
            version.get_or_insert_with(|| value.trim().to_string());
        }
    }
    match (name, version) {
        (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
            Some(Requirement::new(name, version))
        }
        _ => None,
    }
}

/// Recover a requirement from a metadata directory name.
///
/// `numpy-1.26.4.dist-info` → `numpy==1.26.4`,
/// `six-1.16.0-py3.11.egg-info` → `six==1.16.0`.
pub fn parse_metadata_dir_name(dir_name: &str) -> Option<Requirement> {
    let stem = dir_name
        .strip_suffix(".dist-info")
        .or_else(|| dir_name.strip_suffix(".egg-info"))?;
    let mut parts = stem.splitn(3, '-');
    let name = parts.next().filter(|s| !s.is_empty())?;
    let version = parts.next().filter(|s| !s.is_empty())?;
    Some(Requirement::new(name, version))
}
