//! Command registration tool — uploads the bot's slash command set to the
//! chat platform. Meant to run as a deploy step, before the webhook server
//! starts receiving interactions.
//!
//! Usage example (CLI):
//! ```bash
//! DISCORD_BOT_TOKEN=... DISCORD_CLIENT_ID=... pricebot_register --guild-id 1234567890
//! ```
//!
//! Without `--guild-id` (or `DISCORD_GUILD_ID`) the commands are registered
//! globally. The upload replaces the whole set, so re-running is harmless.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::info;
use pricebot_common::BotError;
use pricebot_common::Result;
use pricebot_common::commands::definitions;
use pricebot_common::registry::CommandRegistrar;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    init_logger();
    let args = Args::parse();
    let commands = definitions();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    let registrar = CommandRegistrar::new(args.registration.into_settings()?);
    info!("Registering {} command(s) at {}", commands.len(), registrar.url());
    let count = registrar.register(&commands).await?;
    info!("Done: platform reports {} registered command(s)", count);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
