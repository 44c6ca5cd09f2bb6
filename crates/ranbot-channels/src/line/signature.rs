//! Webhook signature check: base64(HMAC-SHA256(channel secret, raw body)).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use ranbot_core::error::RanbotError;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

fn mac_for(secret: &str) -> Result<HmacSha256, RanbotError> {
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| RanbotError::Config(format!("line channel secret unusable: {e}")))
}

/// Signature LINE would send for `body`.
pub fn sign(secret: &str, body: &[u8]) -> Result<String, RanbotError> {
    let mut mac = mac_for(secret)?;
    mac.update(body);
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Check `signature` against the raw request body.
///
/// Missing, undecodable, or mismatching signatures all yield
/// `RanbotError::InvalidSignature`. The digest comparison is constant-time.
pub fn verify_signature(
    secret: &str,
    body: &[u8],
    signature: Option<&str>,
) -> Result<(), RanbotError> {
    let signature = signature
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RanbotError::InvalidSignature)?;
    let expected = BASE64
        .decode(signature)
        .map_err(|_| RanbotError::InvalidSignature)?;

    let mut mac = mac_for(secret)?;
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| RanbotError::InvalidSignature)
}
