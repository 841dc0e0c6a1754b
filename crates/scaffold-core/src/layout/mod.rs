//! Project layout definition.
//!
//! [`ProjectLayout::standard`] describes what `scaffold init` creates. It is
//! pure data; `scaffold-runtime` walks it and touches the filesystem.

pub mod templates;

use std::path::{Path, PathBuf};

/// Directories created under the project root, parents before children.
pub const DIRECTORIES: [&str; 6] = ["src", "src/utils", "scripts", "data", "notebooks", "figures"];

/// A file written relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub relative_path: PathBuf,
    pub contents: &'static str,
}

impl ScaffoldFile {
    fn new(relative_path: &str, contents: &'static str) -> Self {
        Self {
            relative_path: PathBuf::from(relative_path),
            contents,
        }
    }
}

/// Options for [`ProjectLayout::standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Also write `generate_readme_info.py` for machines without the binary.
    pub python_helper: bool,
}

/// Ordered directories and files making up a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub directories: Vec<PathBuf>,
    pub files: Vec<ScaffoldFile>,
}

impl ProjectLayout {
    /// The data-science project layout.
    pub fn standard(options: LayoutOptions) -> Self {
        let mut files = vec![
            ScaffoldFile::new("src/__init__.py", templates::SRC_INIT),
            ScaffoldFile::new(".gitignore", templates::GITIGNORE),
            ScaffoldFile::new("data/.gitkeep", templates::GITKEEP),
            ScaffoldFile::new("notebooks/.gitkeep", templates::GITKEEP),
            ScaffoldFile::new("src/utils/paths.py", templates::PATHS_PY),
            ScaffoldFile::new("src/utils/functions.py", templates::FUNCTIONS_PY),
            ScaffoldFile::new("src/utils/constants.py", templates::CONSTANTS_PY),
        ];
        if options.python_helper {
            files.push(ScaffoldFile::new(
                "generate_readme_info.py",
                templates::README_INFO_SCRIPT,
            ));
        }
        files.push(ScaffoldFile::new(
            "README_template.md",
            templates::README_TEMPLATE,
        ));

        Self {
            directories: DIRECTORIES.iter().map(PathBuf::from).collect(),
            files,
        }
    }

    /// Absolute directory paths under `base`.
    pub fn directories_under<'a>(&'a self, base: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.directories.iter().map(move |dir| base.join(dir))
    }
}
