use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ctm_cli::commands::{check, schedule, tracks};
use ctm_cli::{Cli, Commands, Config};

/// Load config from default locations plus the optional `--config` file.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Schedule { talks, json }) => {
            let config = load_config(cli.config.as_deref())?;
            schedule::run(&mut stdout, &config, talks, *json)?;
        }
        Some(Commands::Check { talks }) => {
            let config = load_config(cli.config.as_deref())?;
            check::run(&mut stdout, &config, talks)?;
        }
        Some(Commands::Tracks) => {
            let config = load_config(cli.config.as_deref())?;
            tracks::run(&mut stdout, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
