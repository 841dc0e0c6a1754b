//! CLI entry point - the composition root.
//!
//! This is the ONLY place where settings are resolved and infrastructure is
//! wired together via bootstrap. Command dispatch routes to handlers.

use clap::{CommandFactory, Parser};
use scaffold_cli::error::exit_code_for;
use scaffold_cli::{Cli, CliContext, Commands, bootstrap, handlers};
use scaffold_core::{LayoutOptions, Settings};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps stdout clean for `session-info --json`
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init { dir, python_helper } => handlers::init::execute(
            dir.as_deref(),
            LayoutOptions {
                python_helper: *python_helper,
            },
        ),
        Commands::SessionInfo { json } => {
            handlers::session_info::execute(&context(cli, command), *json)
        }
        Commands::Requirements { .. } => handlers::requirements::execute(&context(cli, command)),
        Commands::Readme { .. } => handlers::readme::execute(&context(cli, command)),
        Commands::Generate { .. } => handlers::generate::execute(&context(cli, command)),
        Commands::Config { json } => handlers::config::execute(&context(cli, command), *json),
    }
}

/// Resolve settings (environment, then global flags, then command flags)
/// and bootstrap the context.
fn context(cli: &Cli, command: &Commands) -> CliContext {
    let mut settings = Settings::from_env();
    settings.apply(cli.overrides());
    settings.apply(command.overrides());
    bootstrap(settings)
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
