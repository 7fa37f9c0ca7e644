//! Command-line arguments of the webhook server.
//!
//! Every flag can also be given through the environment variable named next
//! to it, which is how hosted deployments configure the server.
use clap::Parser;
use pricebot_common::net::{COINGECKO_API_URL, DEFAULT_BIND_ADDRESS};
use pricebot_common::registry::RegistrationArgs;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Hex-encoded Ed25519 public key of the application.
    #[arg(long, env = "DISCORD_PUBLIC_KEY")]
    pub public_key: String,

    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Base URL of the price source API.
    #[arg(long, env = "COINGECKO_API_URL", default_value = COINGECKO_API_URL)]
    pub coingecko_url: String,

    /// Register the slash commands once at startup, in the background.
    #[arg(long, env = "REGISTER_COMMANDS")]
    pub register_commands: bool,

    #[allow(missing_docs)]
    #[command(flatten)]
    pub registration: RegistrationArgs,
}
