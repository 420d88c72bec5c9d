//! ikago-config: inspect and generate IkaGo configuration files.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use ikago_config::{logger, Config, ConfigService};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(ConfigService::default_path);

    match cli.command {
        Commands::Check => {
            let config = load(&cli, &config_path)?;
            info!(
                "Configuration {} is valid (method={})",
                config_path.display(),
                config.method
            );
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Show { json } => {
            let config = load(&cli, &config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", render(&config));
            }
        }
        Commands::Init { ref path } => {
            let path = path.clone().unwrap_or(config_path);
            ConfigService::generate_at(&path)
                .with_context(|| format!("Failed to write config file: {}", path.display()))?;
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", path.display());
            }
        }
        Commands::Version => {
            println!("ikago-config {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load the configuration with logging started.
///
/// `--debug` starts logging before the load so loader events are recorded;
/// otherwise logging starts afterwards at the level `verbose` asks for.
fn load(cli: &Cli, path: &std::path::Path) -> Result<Config> {
    if cli.debug {
        logger::init(true, cli.log_dir.as_deref())?;
    }

    let config = ConfigService::load(path)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    if !cli.debug {
        logger::init(config.verbose, cli.log_dir.as_deref())?;
    }

    Ok(config)
}

/// Render the configuration as `key = value` lines using the payload key names.
fn render(config: &Config) -> String {
    format!(
        "listen-devices = {}\n\
         upstream-device = {}\n\
         upstream-port = {}\n\
         method = {}\n\
         password = {}\n\
         verbose = {}\n\
         filters = {}\n\
         server = {}\n\
         listen-port = {}\n",
        config.listen_devs_string(),
        config.up_dev,
        config.up_port,
        config.method,
        if config.password.is_empty() { "" } else { "******" },
        config.verbose,
        config.filters_string(),
        config.server,
        config.listen_port,
    )
}
