//! Session token encoding, decoding, and expiry checks
//!
//! Tokens are base64-encoded JSON claims. No cryptographic signature is
//! applied — the encoding is reversible by any holder, so expiry is the
//! only check a token carries.

use axum::http::HeaderValue;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::types::Role;

/// Issue a token for the given claims with `iat` = now and
/// `exp` = now + `ttl`.
pub fn issue(user_id: Uuid, email: &str, role: Role, ttl: chrono::Duration) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id,
        email: email.to_string(),
        role,
        iat: now,
        exp: now + ttl.num_seconds(),
    };
    encode(&claims)
}

/// Encode claims into an opaque token string
pub fn encode(claims: &TokenClaims) -> Result<String, AuthError> {
    let json = serde_json::to_vec(claims).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode token claims");
        AuthError::AuthenticationFailed
    })?;
    Ok(STANDARD.encode(json))
}

/// Decode a token back into its claims.
///
/// Fails soft: malformed input returns `None` and never propagates an
/// error to the caller — the caller must re-authenticate.
pub fn decode(token: &str) -> Option<TokenClaims> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| {
            tracing::debug!(error = %e, "Token base64 decode failed");
        })
        .ok()?;

    serde_json::from_slice(&bytes)
        .map_err(|e| {
            tracing::debug!(error = %e, "Token claims deserialization failed");
        })
        .ok()
}

/// Check if a token is expired. Undecodable tokens count as expired.
pub fn is_expired(token: &str) -> bool {
    match decode(token) {
        Some(claims) => Utc::now().timestamp() >= claims.exp,
        None => true,
    }
}

/// Get a token's expiration time (unix seconds), if decodable
pub fn expiration(token: &str) -> Option<i64> {
    decode(token).map(|claims| claims.exp)
}

/// Extract bearer token from an Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
