//! Static contents of the generated boilerplate files.

pub const SRC_INIT: &str = "# src package initialization\n";

pub const GITIGNORE: &str = "\
# Ignore Python cache files
__pycache__/
*.pyc
*.pyo

# Ignore virtual environments
venv/
.env/

# Ignore data files
/data/*
!/data/.gitkeep

# Ignore Jupyter Notebook checkpoints
/notebooks/*
!/notebooks/.gitkeep
**/.ipynb_checkpoints/

# Ignore metadata generation
generate_readme_info.py
README_template.md

# Ignore system files
.DS_Store
Thumbs.db
";

pub const PATHS_PY: &str = r#"import os

BASE_DIR = os.path.abspath(os.path.join(os.path.dirname(__file__), ".."))

DATA_PATHS = {
    "remote_data": "/path/to/cluster/data1",
}

def get_path(name):
    """Retrieve the path for a given dataset name."""
    if name in DATA_PATHS:
        return DATA_PATHS[name]
    raise KeyError(f"No path found for dataset '{name}'")
"#;

pub const FUNCTIONS_PY: &str = "# Module containing utility functions\n";

pub const CONSTANTS_PY: &str = "# Module containing project constants\n";

pub const README_TEMPLATE: &str = "\
# Project Name

A Python project for centralized and FAIR data path management.

## **Overview**

This project simplifies data handling with centralized path management.

## **Installation**

1. Clone the repository:
   ```bash
   git clone https://github.com/yourusername/yourproject.git
   cd yourproject
   ```

2. Install dependencies:
   ```bash
   pip install -r requirements.txt
   ```
";

/// Standalone Python equivalent of `scaffold generate`.
pub const README_INFO_SCRIPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/generate_readme_info.py"
));

/// Placeholder kept in otherwise git-ignored directories.
pub const GITKEEP: &str = "";
