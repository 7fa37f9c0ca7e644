//! Interaction payloads exchanged with the chat platform.
//!
//! An inbound `Interaction` is either a handshake `PING` or an application
//! command invocation. The command arguments are folded into a typed
//! `PriceRequest` in a single pass over the option list, so the dispatcher
//! never searches raw options. Replies are `InteractionResponse` values.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::BotError;
use crate::result::Result;

/// Interaction type of a handshake check.
pub const PING: u64 = 1;
/// Interaction type of a slash command invocation.
pub const APPLICATION_COMMAND: u64 = 2;
/// Response type acknowledging a `PING`.
pub const PONG: u8 = 1;
/// Response type carrying a message posted in the invoking channel.
pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
/// Message flag restricting visibility to the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

/// Top-level command name.
pub const COMMAND_NAME: &str = "crypto";
/// Sub-command that requests a price.
pub const PRICE_SUBCOMMAND: &str = "price";
/// Option carrying the asset id.
pub const COIN_OPTION: &str = "coin";
/// Option carrying the quote currency code.
pub const CURRENCY_OPTION: &str = "currency";

/// Inbound interaction payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Raw interaction type as sent by the platform.
    #[serde(rename = "type")]
    pub kind: u64,
    /// Command data, present for command invocations.
    #[serde(default)]
    pub data: Option<CommandData>,
}

/// Classified interaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// Handshake check, answered with `PONG`.
    Ping,
    /// Slash command invocation.
    ApplicationCommand,
    /// Any other type (components, autocomplete, modals...).
    Unsupported(u64),
}

impl Interaction {
    /// Classifies the raw `type` field.
    pub fn kind(&self) -> InteractionKind {
        match self.kind {
            PING => InteractionKind::Ping,
            APPLICATION_COMMAND => InteractionKind::ApplicationCommand,
            other => InteractionKind::Unsupported(other),
        }
    }

    /// Name of the invoked command, if any.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }
}

/// Command invocation data.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    /// Invoked command name.
    pub name: String,
    /// Ordered list of top-level options (sub-commands for `crypto`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<CommandOption>,
}

/// One option of a command invocation; sub-commands nest further options.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Option value; absent for sub-commands.
    #[serde(default)]
    pub value: Option<Value>,
    /// Nested options of a sub-command.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<CommandOption>,
}

/// `null` option lists are treated like absent ones.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<CommandOption>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CommandOption>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Typed arguments of `/crypto price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Lower-case asset id (e.g. `bitcoin`).
    pub coin: String,
    /// Lower-case currency code (e.g. `usd`).
    pub currency: String,
}

impl PriceRequest {
    /// Builds the request from command data.
    ///
    /// Option order is irrelevant. The first occurrence of an option wins and
    /// unknown options are ignored; a missing `price` sub-command, `coin` or
    /// `currency` is an error.
    pub fn from_data(data: &CommandData) -> Result<Self> {
        let sub = data
            .options
            .iter()
            .find(|o| o.name == PRICE_SUBCOMMAND)
            .ok_or(BotError::MissingOption(PRICE_SUBCOMMAND))?;

        let mut coin = None;
        let mut currency = None;
        for option in &sub.options {
            match option.name.as_str() {
                COIN_OPTION if coin.is_none() => {
                    coin = Some(string_value(COIN_OPTION, option.value.as_ref())?)
                }
                CURRENCY_OPTION if currency.is_none() => {
                    currency = Some(string_value(CURRENCY_OPTION, option.value.as_ref())?)
                }
                _ => {}
            }
        }

        Ok(PriceRequest {
            coin: coin.ok_or(BotError::MissingOption(COIN_OPTION))?,
            currency: currency.ok_or(BotError::MissingOption(CURRENCY_OPTION))?,
        })
    }
}

fn string_value(name: &'static str, value: Option<&Value>) -> Result<String> {
    let raw = match value {
        Some(Value::String(s)) => s.trim(),
        Some(other) => {
            return Err(BotError::InvalidOption {
                name,
                reason: format!("expected a string, got {other}"),
            });
        }
        None => return Err(BotError::MissingOption(name)),
    };
    if raw.is_empty() {
        return Err(BotError::InvalidOption {
            name,
            reason: "empty value".to_string(),
        });
    }
    Ok(raw.to_ascii_lowercase())
}

/// Outbound interaction response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionResponse {
    /// Response type.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Message body, absent for `PONG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Message body of a response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResponseData {
    /// Message text (markdown).
    pub content: String,
    /// Message flags such as `EPHEMERAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl InteractionResponse {
    /// Acknowledges a handshake check.
    pub fn pong() -> Self {
        InteractionResponse {
            kind: PONG,
            data: None,
        }
    }

    /// Message visible to the whole channel.
    pub fn message(content: impl Into<String>) -> Self {
        InteractionResponse {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(ResponseData {
                content: content.into(),
                flags: None,
            }),
        }
    }

    /// Message visible only to the invoking user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        InteractionResponse {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(ResponseData {
                content: content.into(),
                flags: Some(EPHEMERAL),
            }),
        }
    }
}
