//! Interaction dispatch.
//!
//! After the signature check the dispatcher decides between three paths:
//! - `PING` → `PONG`, without touching the price source;
//! - `/crypto` command → price lookup, answered with a message in every case;
//! - anything else → `Rejection::UnknownInteraction`.
//!
//! Command execution yields an explicit `CommandOutcome`. Rendering turns a
//! failed outcome into the fixed ephemeral warning, so a command never ends
//! in a transport-level error.
use std::sync::Arc;

use log::{error, info, warn};
use pricebot_common::interaction::{COMMAND_NAME, InteractionKind, PRICE_SUBCOMMAND};
use pricebot_common::{BotError, Interaction, InteractionResponse, PriceRequest};

use crate::error::Rejection;
use crate::model::price_source::PriceSource;
use crate::model::quote::{PRICE_UNAVAILABLE, PriceQuote};

/// Result of running the price command.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The price source produced a quote.
    Quoted(PriceQuote),
    /// The command could not be completed.
    Failed(BotError),
}

/// Routes verified interactions to their handlers.
pub struct Dispatcher {
    price_source: Arc<dyn PriceSource>,
}

impl Dispatcher {
    /// Create a dispatcher backed by `price_source`.
    pub fn new(price_source: Arc<dyn PriceSource>) -> Self {
        Self { price_source }
    }

    /// Produce the response for a verified interaction.
    pub async fn dispatch(&self, interaction: &Interaction) -> Result<InteractionResponse, Rejection> {
        match interaction.kind() {
            InteractionKind::Ping => Ok(InteractionResponse::pong()),
            InteractionKind::ApplicationCommand
                if interaction.command_name() == Some(COMMAND_NAME) =>
            {
                let outcome = self.execute(interaction).await;
                Ok(render(outcome))
            }
            InteractionKind::ApplicationCommand => {
                warn!(
                    "Unknown command: {}",
                    interaction.command_name().unwrap_or("<none>")
                );
                Err(Rejection::UnknownInteraction)
            }
            InteractionKind::Unsupported(kind) => {
                warn!("Unsupported interaction type: {}", kind);
                Err(Rejection::UnknownInteraction)
            }
        }
    }

    /// Run `/crypto price` for the interaction.
    pub async fn execute(&self, interaction: &Interaction) -> CommandOutcome {
        let request = match interaction.data.as_ref() {
            Some(data) => PriceRequest::from_data(data),
            None => Err(BotError::MissingOption(PRICE_SUBCOMMAND)),
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => return CommandOutcome::Failed(e),
        };

        match self.price_source.fetch_price(&request).await {
            Ok(quote) => CommandOutcome::Quoted(quote),
            Err(e) => CommandOutcome::Failed(e),
        }
    }
}

/// Turn a command outcome into the reply message.
pub fn render(outcome: CommandOutcome) -> InteractionResponse {
    let failure = match outcome {
        CommandOutcome::Quoted(quote) => match quote.to_message() {
            Ok(content) => {
                info!(
                    "Quote served: {}",
                    serde_json::to_string(&quote).unwrap_or_default()
                );
                return InteractionResponse::message(content);
            }
            Err(e) => e,
        },
        CommandOutcome::Failed(e) => e,
    };
    error!("Command handling error: {}", failure);
    InteractionResponse::ephemeral(PRICE_UNAVAILABLE)
}
