//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conference track manager.
///
/// Packs a list of talks into the morning and evening sessions of each
/// configured track and prints the running order.
#[derive(Debug, Parser)]
#[command(name = "ctm", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Schedule talks from a file and print the running order.
    Schedule {
        /// Talk list, one `<topic> <length>` per line.
        talks: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a talk list fits the available time without scheduling.
    Check {
        /// Talk list, one `<topic> <length>` per line.
        talks: PathBuf,
    },

    /// List configured tracks and session windows.
    Tracks,
}
