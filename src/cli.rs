//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and generate IkaGo configuration files
#[derive(Parser)]
#[command(
    name = "ikago-config",
    version,
    about = "Inspect and generate IkaGo configuration files",
    long_about = "Loads an IkaGo configuration file the same way the tunnel does \
                  (comment lines stripped, environment variables expanded) and \
                  reports the resulting settings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to a daily-rotated file in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Load the configuration file and report whether it is valid
    Check,
    /// Print the loaded configuration
    Show {
        /// Print as JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },
    /// Generate a sample configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Display version information
    Version,
}
