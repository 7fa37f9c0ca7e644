//! Domain models and utilities for the webhook server.
//!
//! This module groups the price-related types used by the dispatcher:
//! - `quote` — `PriceQuote` and the reply text built from it.
//! - `currency` — en-US currency amount formatting.
//! - `price_source` — the `PriceSource` seam and the CoinGecko client.

pub mod currency;
pub mod price_source;
pub mod quote;
