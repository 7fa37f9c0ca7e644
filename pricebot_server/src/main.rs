//! Crypto price webhook server binary.
//!
//! Reads its configuration from flags/environment (see `args`), parses the
//! public key up front so a bad key fails at startup, optionally registers
//! the slash commands in the background, then serves the interaction
//! endpoint until Ctrl+C.
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use pricebot_common::commands::definitions;
use pricebot_common::registry::{CommandRegistrar, RegistrationSettings};
use pricebot_common::{BotError, Result};
use pricebot_server::args::Args;
use pricebot_server::model::price_source::{CoinGeckoClient, PriceSource};
use pricebot_server::{AppState, Dispatcher, SignatureVerifier, create_router};

#[tokio::main]
async fn main() -> Result<(), BotError> {
    init_logger();
    let args = Args::parse();

    let verifier = SignatureVerifier::from_hex(&args.public_key)?;
    let http_client = reqwest::Client::new();
    let price_source: Arc<dyn PriceSource> =
        Arc::new(CoinGeckoClient::new(http_client.clone(), &args.coingecko_url));
    info!("Price source: {}", price_source.name());

    if args.register_commands {
        match args.registration.into_settings() {
            Ok(settings) => spawn_registration(http_client, settings),
            Err(e) => error!("Skipping command registration: {}", e),
        }
    }

    let state = AppState::new(verifier, Dispatcher::new(price_source));
    let listener = tokio::net::TcpListener::bind(&args.bind_address).await?;
    info!("Interaction endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Register the command set once without holding up request handling.
fn spawn_registration(http_client: reqwest::Client, settings: RegistrationSettings) {
    tokio::spawn(async move {
        let registrar = CommandRegistrar::with_client(http_client, settings);
        if let Err(e) = registrar.register(&definitions()).await {
            error!("Command registration failed: {}", e);
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
