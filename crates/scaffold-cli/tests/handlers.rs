//! Handler tests wired through `bootstrap_with`.
//!
//! The runner and host are fakes, so nothing here depends on Python or R
//! being installed on the test machine.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scaffold_cli::error::exit_code_for;
use scaffold_cli::{CliContext, bootstrap_with, handlers};
use scaffold_core::layout::templates;
use scaffold_core::{
    CommandOutcome, CommandOutput, CommandRunner, HostInfoPort, LayoutOptions, SESSION_INFO_HEADER,
    Settings,
};
use tempfile::{TempDir, tempdir};

struct FakeHost;

impl HostInfoPort for FakeHost {
    fn platform(&self) -> String {
        "Linux-6.8.0-x86_64-with-Ubuntu-24.04".to_string()
    }

    fn os_name(&self) -> String {
        "Linux".to_string()
    }

    fn architecture(&self) -> String {
        "64bit".to_string()
    }

    fn processor(&self) -> String {
        "AMD Ryzen 7 7840U".to_string()
    }
}

/// Neither R nor Python is installed.
struct EmptyPath;

impl CommandRunner for EmptyPath {
    fn run(&self, _program: &Path, _args: &[String]) -> CommandOutcome {
        CommandOutcome::NotFound
    }
}

/// Python answers `sys.version`, R is missing.
struct PythonOnly;

impl CommandRunner for PythonOnly {
    fn run(&self, program: &Path, _args: &[String]) -> CommandOutcome {
        if program == Path::new("/venv/bin/python") {
            CommandOutcome::Completed(CommandOutput::ok("3.11.9 (main, Apr  2 2024)\n[Clang 15.0.0]\n"))
        } else {
            CommandOutcome::NotFound
        }
    }
}

fn site_packages(root: &Path) -> PathBuf {
    let site = root.join("site-packages");
    for (dir, name, version) in [
        ("requests-2.31.0.dist-info", "requests", "2.31.0"),
        ("Flask-3.0.2.dist-info", "Flask", "3.0.2"),
        ("click-8.1.7.dist-info", "click", "8.1.7"),
    ] {
        let dist = site.join(dir);
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("METADATA"), format!("Name: {name}\nVersion: {version}\n")).unwrap();
    }
    site
}

fn context(temp: &TempDir, runner: Arc<dyn CommandRunner>, python: Option<&str>) -> CliContext {
    let settings = Settings {
        site_packages: vec![site_packages(temp.path())],
        template: temp.path().join("README_template.md"),
        requirements_output: temp.path().join("requirements.txt"),
        readme_output: temp.path().join("README.md"),
        ..Settings::default()
    };
    bootstrap_with(settings, runner, Arc::new(FakeHost), python.map(PathBuf::from))
}

#[test]
fn init_writes_the_full_layout() {
    let temp = tempdir().unwrap();
    let project = temp.path().join("analysis");

    handlers::init::execute(Some(&project), LayoutOptions::default()).unwrap();

    for dir in ["src", "src/utils", "scripts", "data", "notebooks", "figures"] {
        assert!(project.join(dir).is_dir(), "{dir} missing");
    }
    assert_eq!(
        fs::read_to_string(project.join("src/__init__.py")).unwrap(),
        "# src package initialization\n"
    );
    assert_eq!(
        fs::read_to_string(project.join("src/utils/paths.py")).unwrap(),
        templates::PATHS_PY
    );
    assert_eq!(
        fs::read_to_string(project.join(".gitignore")).unwrap(),
        templates::GITIGNORE
    );
    assert!(project.join("README_template.md").is_file());
    assert!(!project.join("generate_readme_info.py").exists());
}

#[test]
fn generate_writes_requirements_then_readme() {
    let temp = tempdir().unwrap();
    let ctx = context(&temp, Arc::new(PythonOnly), Some("/venv/bin/python"));
    fs::write(&ctx.settings.template, "# Survey Analysis\n").unwrap();

    handlers::generate::execute(&ctx).unwrap();

    assert_eq!(
        fs::read_to_string(&ctx.settings.requirements_output).unwrap(),
        "click==8.1.7\nFlask==3.0.2\nrequests==2.31.0\n"
    );

    let readme = fs::read_to_string(&ctx.settings.readme_output).unwrap();
    assert!(readme.starts_with(&format!("# Survey Analysis\n\n\n{SESSION_INFO_HEADER}\n\n")));
    assert!(readme.contains("- **Python Version**: 3.11.9 (main, Apr  2 2024) [Clang 15.0.0]\n"));
    assert!(readme.contains("- **Processor**: AMD Ryzen 7 7840U\n"));
    assert!(readme.ends_with("- **R Version**: R is not installed or not found in PATH."));
}

#[test]
fn readme_without_template_fails_with_io_exit_code() {
    let temp = tempdir().unwrap();
    let ctx = context(&temp, Arc::new(EmptyPath), None);

    let err = handlers::readme::execute(&ctx).unwrap_err();

    assert_eq!(exit_code_for(&err), 74);
    assert!(!ctx.settings.readme_output.exists());
}

#[test]
fn requirements_without_interpreter_or_site_dirs_fails() {
    let temp = tempdir().unwrap();
    let mut ctx = context(&temp, Arc::new(EmptyPath), None);
    ctx.settings.site_packages.clear();

    let err = handlers::requirements::execute(&ctx).unwrap_err();

    assert_eq!(exit_code_for(&err), 78);
    assert!(!ctx.settings.requirements_output.exists());
}

#[test]
fn requirements_are_deterministic_across_runs() {
    let temp = tempdir().unwrap();
    let ctx = context(&temp, Arc::new(EmptyPath), None);

    handlers::requirements::execute(&ctx).unwrap();
    let first = fs::read(&ctx.settings.requirements_output).unwrap();
    handlers::requirements::execute(&ctx).unwrap();
    let second = fs::read(&ctx.settings.requirements_output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn session_info_never_fails_without_tools() {
    let temp = tempdir().unwrap();
    let ctx = context(&temp, Arc::new(EmptyPath), None);

    handlers::session_info::execute(&ctx, true).unwrap();
    handlers::session_info::execute(&ctx, false).unwrap();
}

#[test]
fn config_reports_in_both_formats() {
    let temp = tempdir().unwrap();
    let ctx = context(&temp, Arc::new(EmptyPath), None);

    handlers::config::execute(&ctx, false).unwrap();
    handlers::config::execute(&ctx, true).unwrap();
}
