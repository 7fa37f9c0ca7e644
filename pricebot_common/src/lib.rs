//!
//! Common types and utilities shared by the webhook server and the registration tool.
//!
//! This crate aggregates:
//! - `error` — unified error type `BotError` used across the workspace.
//! - `result` — handy `Result<T, BotError>` alias.
//! - `coins` — known coins and quote currencies.
//! - `interaction` — inbound interaction payloads and outbound responses.
//! - `commands` — slash command definitions.
//! - `registry` — uploads the command definitions to the platform.
//! - `net` — endpoints, header names and URL helpers.
#![warn(missing_docs)]
pub mod coins;
pub mod commands;
pub mod error;
pub mod interaction;
pub mod net;
pub mod registry;
pub mod result;

pub use error::BotError;
pub use interaction::{Interaction, InteractionResponse, PriceRequest};
pub use result::Result;
