//! Coin identifiers and quote currencies known to the bot.
//!
//! Both tables feed the slash command choices; `Coin` also supplies the
//! friendly display names used in price replies.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Set of coins with a curated display name.
///
/// The serialized form is the CoinGecko asset id.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, EnumIter, Hash, Eq, PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Cardano,
    Dogecoin,
    Solana,
    Polkadot,
    Litecoin,
    Ripple,
    Binancecoin,
}

impl Coin {
    /// Human-readable name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Cardano => "Cardano",
            Coin::Dogecoin => "Dogecoin",
            Coin::Solana => "Solana",
            Coin::Polkadot => "Polkadot",
            Coin::Litecoin => "Litecoin",
            Coin::Ripple => "XRP (Ripple)",
            Coin::Binancecoin => "BNB",
        }
    }

    /// Returns the label for an arbitrary asset id, falling back to the id itself.
    pub fn label_for(id: &str) -> String {
        match id.parse::<Coin>() {
            Ok(coin) => coin.display_name().to_string(),
            Err(_) => id.to_string(),
        }
    }

    /// All known coins in declaration order.
    pub fn all() -> Vec<Coin> {
        Coin::iter().collect()
    }
}

/// Quote currencies offered as command choices.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, EnumIter, Hash, Eq, PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    /// Upper-case ISO 4217 code, used as the choice label.
    pub fn code(&self) -> String {
        self.to_string().to_ascii_uppercase()
    }

    /// All offered currencies in declaration order.
    pub fn all() -> Vec<Currency> {
        Currency::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_coin_uses_display_name() {
        assert_eq!(Coin::label_for("bitcoin"), "Bitcoin");
        assert_eq!(Coin::label_for("ripple"), "XRP (Ripple)");
        assert_eq!(Coin::label_for("binancecoin"), "BNB");
    }

    #[test]
    fn unknown_coin_falls_back_to_raw_id() {
        assert_eq!(Coin::label_for("shiba-inu"), "shiba-inu");
    }

    #[test]
    fn coin_ids_match_price_source_ids() {
        let ids: Vec<String> = Coin::all().iter().map(|c| c.to_string()).collect();
        assert_eq!(ids.len(), 9);
        assert!(ids.contains(&"binancecoin".to_string()));
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn currency_codes_are_upper_case() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Usd.to_string(), "usd");
        assert_eq!(Currency::all().len(), 7);
    }
}
