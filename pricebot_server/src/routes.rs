//! HTTP surface of the webhook.
//!
//! `POST /` and `POST /interactions` take the raw body, check the signature,
//! then parse and dispatch. `GET /health` is unsigned.
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, warn};
use pricebot_common::{Interaction, InteractionResponse};

use crate::dispatcher::Dispatcher;
use crate::error::Rejection;
use crate::verifier::SignatureVerifier;

/// Read-only state shared by all requests.
#[derive(Clone)]
pub struct AppState {
    /// Verifier built from the configured public key.
    pub verifier: Arc<SignatureVerifier>,
    /// Interaction dispatcher.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Bundle the verifier and dispatcher for the router.
    pub fn new(verifier: SignatureVerifier, dispatcher: Dispatcher) -> Self {
        Self {
            verifier: Arc::new(verifier),
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Build the HTTP router.
///
/// The interaction endpoint is served on both `/` and `/interactions`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(interactions))
        .route("/interactions", post(interactions))
        .route("/health", get(health))
        .with_state(state)
}

/// Webhook endpoint: authenticate, parse, dispatch.
///
/// The body is taken as raw bytes because the signature covers the exact
/// bytes sent by the platform.
async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, Rejection> {
    state.verifier.verify_request(&headers, &body)?;

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected interaction: malformed payload: {}", e);
        Rejection::MalformedPayload
    })?;
    debug!(
        "Interaction type {} command {:?}",
        interaction.kind,
        interaction.command_name()
    );

    let response = state.dispatcher.dispatch(&interaction).await?;
    Ok(Json(response))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::price_source::PriceSource;
    use crate::model::price_source::mock::{FailingPriceSource, StaticPriceSource};
    use crate::verifier::test_keys::{public_key_hex, sign};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const TIMESTAMP: &str = "1718000000";

    fn app(source: Arc<dyn PriceSource>) -> Router {
        let verifier = SignatureVerifier::from_hex(&public_key_hex()).unwrap();
        create_router(AppState::new(verifier, Dispatcher::new(source)))
    }

    fn signed_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/interactions")
            .header("X-Signature-Ed25519", sign(TIMESTAMP, body.as_bytes()))
            .header("X-Signature-Timestamp", TIMESTAMP)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn price_body(coin: &str, currency: &str) -> String {
        json!({
            "type": 2,
            "data": {
                "name": "crypto",
                "options": [{
                    "name": "price",
                    "type": 1,
                    "options": [
                        {"name": "coin", "type": 3, "value": coin},
                        {"name": "currency", "type": 3, "value": currency}
                    ]
                }]
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn ping_returns_pong() {
        let source = Arc::new(StaticPriceSource::default());
        let response = app(source.clone())
            .oneshot(signed_request(r#"{"type":1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_json(response).await, json!({"type": 1}));
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn root_path_serves_interactions() {
        let mut request = signed_request(r#"{"type":1}"#);
        *request.uri_mut() = "/".parse().unwrap();
        let response = app(Arc::new(StaticPriceSource::default()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_headers_are_unauthorized() {
        for (name, value) in [
            ("x-signature-ed25519", "00"),
            ("x-signature-timestamp", TIMESTAMP),
        ] {
            let request = Request::builder()
                .method("POST")
                .uri("/interactions")
                .header(name, value)
                .body(Body::from(r#"{"type":1}"#))
                .unwrap();
            let response = app(Arc::new(StaticPriceSource::default()))
                .oneshot(request)
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_bytes(response).await, b"Invalid request signature");
        }
    }

    #[tokio::test]
    async fn tampered_body_is_unauthorized() {
        let source = Arc::new(StaticPriceSource::default().with_price("bitcoin", "usd", 1.0));
        let mut request = signed_request(r#"{"type":1}"#);
        *request.body_mut() = Body::from(price_body("bitcoin", "usd"));
        let response = app(source.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn price_command_returns_message() {
        let source = Arc::new(StaticPriceSource::default().with_price("bitcoin", "usd", 65000.0));
        let response = app(source)
            .oneshot(signed_request(&price_body("bitcoin", "usd")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"type": 4, "data": {"content": "💰 **Bitcoin** price in **USD** is $65,000.00"}})
        );
    }

    #[tokio::test]
    async fn failed_lookup_returns_ephemeral_warning() {
        let response = app(Arc::new(FailingPriceSource))
            .oneshot(signed_request(&price_body("bitcoin", "usd")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "type": 4,
                "data": {
                    "content": "⚠️ Could not fetch price. Please try again later.",
                    "flags": 64
                }
            })
        );
    }

    #[tokio::test]
    async fn unknown_type_is_bad_request() {
        let response = app(Arc::new(StaticPriceSource::default()))
            .oneshot(signed_request(r#"{"type":3}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_bytes(response).await, b"Unknown interaction type");
    }

    #[tokio::test]
    async fn wide_type_number_is_unknown_not_malformed() {
        let response = app(Arc::new(StaticPriceSource::default()))
            .oneshot(signed_request(r#"{"type":300}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_bytes(response).await, b"Unknown interaction type");
    }

    #[tokio::test]
    async fn null_options_get_the_warning() {
        let source = Arc::new(StaticPriceSource::default());
        let body = r#"{"type":2,"data":{"name":"crypto","options":null}}"#;
        let response = app(source.clone())
            .oneshot(signed_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["flags"], json!(64));
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_payload_is_bad_request() {
        let response = app(Arc::new(StaticPriceSource::default()))
            .oneshot(signed_request("not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_is_unsigned() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(Arc::new(StaticPriceSource::default()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
