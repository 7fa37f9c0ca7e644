//! Command-line arguments for the command registration tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use pricebot_common::registry::RegistrationArgs;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Print the command definitions as JSON instead of uploading them.
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub registration: RegistrationArgs,
}
