//! Error types shared between the webhook server and the registration tool.
//!
//! The `BotError` enum unifies the failure cases of the workspace: outbound HTTP,
//! JSON handling, malformed interaction options, upstream price lookups and
//! configuration, allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by server and registration tool.
#[derive(Error, Debug)]
pub enum BotError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Outbound HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status.
    #[error("Upstream error: {status} - {message}")]
    Upstream {
        /// HTTP status code returned by the remote API.
        status: u16,
        /// Short description of the failure.
        message: String,
    },

    /// A required command option was absent from the interaction payload.
    #[error("Missing command option: {0}")]
    MissingOption(&'static str),

    /// A command option was present but carried an unusable value.
    #[error("Invalid command option {name}: {reason}")]
    InvalidOption {
        /// Option name as sent by the platform.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The price source answered but did not contain the requested pair.
    #[error("Price not found for {coin}/{currency}")]
    PriceNotFound {
        /// Asset identifier that was requested.
        coin: String,
        /// Currency code that was requested.
        currency: String,
    },

    /// Currency code cannot be rendered as a currency amount.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// Hex decoding error for keys and signatures.
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Configured public key cannot be used for verification.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Missing or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
