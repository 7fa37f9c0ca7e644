//! Request authentication.
//!
//! Every interaction carries a detached Ed25519 signature in
//! `X-Signature-Ed25519` over `X-Signature-Timestamp ++ body`. Anything that
//! does not verify is rejected before the body is parsed.
use axum::http::HeaderMap;
use ed25519_dalek::{PUBLIC_KEY_LENGTH, Signature, Verifier, VerifyingKey};
use log::{debug, warn};
use pricebot_common::BotError;
use pricebot_common::net::{SIGNATURE_HEADER, TIMESTAMP_HEADER};

use crate::error::Rejection;

/// Ed25519 verifier for inbound interaction requests.
///
/// The platform signs `timestamp ++ body` with the application's key. The
/// public key is parsed once at startup; every request is then checked with
/// [`SignatureVerifier::verify_request`] before its body is looked at.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Parse a hex-encoded 32-byte public key.
    pub fn from_hex(public_key: &str) -> Result<Self, BotError> {
        let bytes = hex::decode(public_key.trim())?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            BotError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                b.len()
            ))
        })?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| BotError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { key })
    }

    /// Check a detached hex signature over `timestamp ++ body`.
    ///
    /// Malformed hex or a signature of the wrong length counts as a failed check.
    pub fn verify(&self, body: &[u8], timestamp: &str, signature_hex: &str) -> bool {
        let Ok(signature_bytes) = hex::decode(signature_hex.trim()) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&signature_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);
        self.key.verify(&message, &signature).is_ok()
    }

    /// Authenticate a request from its headers and raw body.
    ///
    /// Header names are matched case-insensitively.
    pub fn verify_request(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), Rejection> {
        let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
        let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            warn!("Rejected interaction: missing signature headers");
            return Err(Rejection::MissingSignature);
        };

        if !self.verify(body, timestamp, signature) {
            warn!("Rejected interaction: invalid signature (timestamp {})", timestamp);
            return Err(Rejection::InvalidSignature);
        }
        debug!("Signature verified for timestamp {}", timestamp);
        Ok(())
    }
}

/// One-shot verification with a hex-encoded public key.
///
/// An unparsable key fails closed.
pub fn verify_signature(body: &[u8], timestamp: &str, signature_hex: &str, public_key_hex: &str) -> bool {
    match SignatureVerifier::from_hex(public_key_hex) {
        Ok(verifier) => verifier.verify(body, timestamp, signature_hex),
        Err(e) => {
            warn!("Cannot verify signature: {}", e);
            false
        }
    }
}
