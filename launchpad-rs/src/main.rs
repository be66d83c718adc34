//! Launchpad CLI entry point.

use clap::Parser;
use launchpad::cli::args::{Cli, Commands};
use launchpad::cli::output::Output;
use launchpad::cli::{capture, dashboard, new, promote, recent, search, settings, types, watch};
use launchpad::config::{Config, Settings};
use launchpad::error::LaunchpadError;
use launchpad::vault::Vault;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `RUST_LOG` wins over the verbosity flags. Logs go to stderr so command
/// output on stdout stays machine-readable.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), LaunchpadError> {
    let output = Output::new(cli.output_format(), cli.quiet);

    // Needs no vault
    if let Commands::Types = cli.command {
        return types::run(&output);
    }

    let config = Config::load()?;
    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::new(vault_path)?;
    let settings = Settings::load(&vault.root)?;

    match &cli.command {
        Commands::Dashboard => dashboard::run(&vault, &settings, &output),
        Commands::Watch(args) => watch::run(&vault, &settings, args, output),
        Commands::Capture => capture::run(&vault, &output),
        Commands::New(args) => new::run(&vault, args, &output),
        Commands::Promote(args) => promote::run(&vault, args, &output),
        Commands::Search(args) => search::run(&vault, &settings, args, &output),
        Commands::Recent(args) => recent::run(&vault, &settings, args, &output),
        Commands::Settings => settings::run(&vault, &settings, &output),
        Commands::Types => types::run(&output),
    }
}
