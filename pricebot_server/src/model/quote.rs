//! Price quote model and reply formatting.
//!
//! A `PriceQuote` is the value returned by a price source for one coin and
//! currency. It is created per request and never cached. This module also
//! renders the user-facing reply text.

use chrono::Utc;
use pricebot_common::BotError;
use pricebot_common::coins::Coin;
use serde::Serialize;

use crate::model::currency::format_currency;

/// Reply sent when a price cannot be produced.
pub const PRICE_UNAVAILABLE: &str = "⚠️ Could not fetch price. Please try again later.";

/// Spot price of a coin in a currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceQuote {
    /// Asset id (e.g. `bitcoin`).
    pub coin: String,
    /// Lower-case currency code (e.g. `usd`).
    pub currency: String,
    /// Price of one unit of `coin` in `currency`.
    pub price: f64,
    /// UTC timestamp in milliseconds since Unix epoch when the price was fetched.
    pub timestamp: u64,
}

impl PriceQuote {
    /// Create a quote stamped with the current time.
    pub fn new(coin: impl Into<String>, currency: impl Into<String>, price: f64) -> Self {
        PriceQuote {
            coin: coin.into(),
            currency: currency.into(),
            price,
            timestamp: Utc::now().timestamp_millis() as u64,
        }
    }

    /// Friendly coin name, or the raw id for coins outside the known table.
    pub fn coin_label(&self) -> String {
        Coin::label_for(&self.coin)
    }

    /// Upper-case currency code.
    pub fn currency_code(&self) -> String {
        self.currency.to_ascii_uppercase()
    }

    /// Render the reply text, e.g. `💰 **Bitcoin** price in **USD** is $65,000.00`.
    pub fn to_message(&self) -> Result<String, BotError> {
        let code = self.currency_code();
        let amount = format_currency(self.price, &code)?;
        Ok(format!(
            "💰 **{}** price in **{}** is {}",
            self.coin_label(),
            code,
            amount
        ))
    }
}
