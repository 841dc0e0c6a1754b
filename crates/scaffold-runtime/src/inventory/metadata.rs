//! Distribution metadata scan.
//!
//! Every `*.dist-info` and `*.egg-info` directory in the search path is a
//! distribution, as is a legacy `*.egg-info` file. The `METADATA` (or
//! `PKG-INFO`) headers give name and version; when those are unreadable the
//! entry name is used. Unreadable site directories are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use scaffold_core::requirements::{parse_core_metadata, parse_metadata_dir_name};
use scaffold_core::{DependencyList, InventoryError, PackageInventory, Requirement};
use tracing::{debug, warn};

/// Metadata files checked inside a distribution directory, in order.
const METADATA_FILES: [&str; 2] = ["METADATA", "PKG-INFO"];

/// Inventory that scans site directories for distribution metadata.
#[derive(Debug, Clone)]
pub struct MetadataInventory {
    site_dirs: Vec<PathBuf>,
}

impl MetadataInventory {
    /// Scan `site_dirs` in order; earlier directories shadow later ones.
    pub fn new(site_dirs: Vec<PathBuf>) -> Self {
        Self { site_dirs }
    }

    fn scan_dir(dir: &Path) -> Vec<Requirement> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable site directory");
                return Vec::new();
            }
        };

        // Directory order is filesystem dependent; sort for stable shadowing.
        let mut dists: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_distribution(path))
            .collect();
        dists.sort();

        dists.iter().filter_map(|path| read_distribution(path)).collect()
    }
}

impl PackageInventory for MetadataInventory {
    fn strategy_name(&self) -> &'static str {
        "metadata"
    }

    fn collect(&self) -> Result<DependencyList, InventoryError> {
        let mut found = Vec::new();
        for dir in &self.site_dirs {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "Skipping missing site directory");
                continue;
            }
            found.extend(Self::scan_dir(dir));
        }
        Ok(DependencyList::from_packages(found))
    }
}

fn is_distribution(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.ends_with(".egg-info") {
        return path.is_dir() || path.is_file();
    }
    name.ends_with(".dist-info") && path.is_dir()
}

fn read_distribution(path: &Path) -> Option<Requirement> {
    let text = if path.is_file() {
        fs::read_to_string(path).ok()
    } else {
        METADATA_FILES
            .iter()
            .find_map(|file| fs::read_to_string(path.join(file)).ok())
    };

    let requirement = text.and_then(|text| parse_core_metadata(&text)).or_else(|| {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_metadata_dir_name)
    });

    if requirement.is_none() {
        debug!(dist = %path.display(), "Skipping distribution without usable metadata");
    }
    requirement
}
