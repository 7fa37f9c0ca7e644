//! Price sources used by the `/crypto price` command.
//!
//! `PriceSource` is the seam between the dispatcher and the outside world.
//! The production implementation, `CoinGeckoClient`, issues one
//! `GET /simple/price?ids=<coin>&vs_currencies=<currency>` per call and
//! expects `{ "<coin>": { "<currency>": <number> } }` back. No retries and no
//! timeout beyond the HTTP client default.

use async_trait::async_trait;
use log::{debug, error};
use pricebot_common::net::simple_price_url;
use pricebot_common::{BotError, PriceRequest, Result};
use serde_json::Value;

use crate::model::quote::PriceQuote;

/// Looks up the current price of a coin.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch a fresh quote for `request`.
    async fn fetch_price(&self, request: &PriceRequest) -> Result<PriceQuote>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// CoinGecko `simple/price` client.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http_client: reqwest::Client,
    url: String,
}

impl CoinGeckoClient {
    /// Create a client for the API rooted at `api_base`.
    pub fn new(http_client: reqwest::Client, api_base: &str) -> Self {
        Self {
            http_client,
            url: simple_price_url(api_base),
        }
    }
}

/// Extract `body[coin][currency]` as a number.
fn extract_price(body: &Value, request: &PriceRequest) -> Result<f64> {
    body.get(&request.coin)
        .and_then(|prices| prices.get(&request.currency))
        .and_then(Value::as_f64)
        .ok_or_else(|| BotError::PriceNotFound {
            coin: request.coin.clone(),
            currency: request.currency.clone(),
        })
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_price(&self, request: &PriceRequest) -> Result<PriceQuote> {
        debug!(
            "Requesting {} price in {} from {}",
            request.coin, request.currency, self.url
        );

        let response = self
            .http_client
            .get(&self.url)
            .query(&[
                ("ids", request.coin.as_str()),
                ("vs_currencies", request.currency.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("CoinGecko API error: {} {}", status, body);
            return Err(BotError::Upstream {
                status: status.as_u16(),
                message: "CoinGecko API error".to_string(),
            });
        }

        let body: Value = response.json().await?;
        let price = extract_price(&body, request)?;
        Ok(PriceQuote::new(&request.coin, &request.currency, price))
    }

    fn name(&self) -> &'static str {
        "coingecko"
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn price_body(coin: &str, currency: &str, price: Value) -> Value {
        let mut prices = serde_json::Map::new();
        prices.insert(currency.to_string(), price);
        let mut body = serde_json::Map::new();
        body.insert(coin.to_string(), Value::Object(prices));
        Value::Object(body)
    }

    async fn stub_simple_price(
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        let ids = params.get("ids").map(String::as_str).unwrap_or_default();
        let currency = params.get("vs_currencies").map(String::as_str).unwrap_or_default();
        match ids {
            "bitcoin" => (StatusCode::OK, Json(price_body(ids, currency, json!(65000)))),
            "weird" => (StatusCode::OK, Json(price_body(ids, currency, json!("n/a")))),
            "broken" => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"status": {"error_code": 429}})),
            ),
            _ => (StatusCode::OK, Json(json!({}))),
        }
    }

    async fn spawn_stub() -> String {
        let app = Router::new().route("/api/v3/simple/price", get(stub_simple_price));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/v3", addr)
    }

    fn request(coin: &str, currency: &str) -> PriceRequest {
        PriceRequest {
            coin: coin.to_string(),
            currency: currency.to_string(),
        }
    }

    #[tokio::test]
    async fn fetches_price_by_coin_and_currency() {
        let client = CoinGeckoClient::new(reqwest::Client::new(), &spawn_stub().await);
        let quote = client.fetch_price(&request("bitcoin", "usd")).await.unwrap();
        assert_eq!(quote.coin, "bitcoin");
        assert_eq!(quote.currency, "usd");
        assert_eq!(quote.price, 65000.0);
    }

    #[tokio::test]
    async fn missing_price_is_an_error() {
        let client = CoinGeckoClient::new(reqwest::Client::new(), &spawn_stub().await);
        let err = client.fetch_price(&request("nocoin", "usd")).await.unwrap_err();
        assert!(matches!(err, BotError::PriceNotFound { .. }));
    }

    #[tokio::test]
    async fn non_numeric_price_is_an_error() {
        let client = CoinGeckoClient::new(reqwest::Client::new(), &spawn_stub().await);
        let err = client.fetch_price(&request("weird", "usd")).await.unwrap_err();
        assert!(matches!(err, BotError::PriceNotFound { .. }));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let client = CoinGeckoClient::new(reqwest::Client::new(), &spawn_stub().await);
        let err = client.fetch_price(&request("broken", "usd")).await.unwrap_err();
        assert!(matches!(err, BotError::Upstream { status: 429, .. }));
    }

    #[tokio::test]
    async fn unreachable_source_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = CoinGeckoClient::new(reqwest::Client::new(), &format!("http://{}", addr));
        let err = client.fetch_price(&request("bitcoin", "usd")).await.unwrap_err();
        assert!(matches!(err, BotError::Http(_)));
    }
}
