//! Crypto price interaction webhook.
//!
//! The server receives signed interaction callbacks from the chat platform
//! and answers them synchronously. Building blocks:
//!
//! - `verifier` — Ed25519 check of `timestamp ++ body` against the
//!   application's public key; any failure ends the request with 401.
//! - `dispatcher` — classifies the interaction (`PING`, `/crypto` command,
//!   anything else) and produces the reply; command failures become an
//!   ephemeral warning message instead of an error status.
//! - `model` — price quotes, currency formatting, and the `PriceSource`
//!   seam with its CoinGecko implementation.
//! - `routes` — the axum router tying the above together.
//!
//! Nothing is shared between requests except read-only state; command
//! registration happens outside the request path.
#![warn(missing_docs)]
pub mod args;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod routes;
pub mod verifier;

pub use dispatcher::{CommandOutcome, Dispatcher};
pub use error::Rejection;
pub use routes::{AppState, create_router};
pub use verifier::SignatureVerifier;
