//! Axum extractors for authentication
//!
//! Token decoding is stateless (the encoding carries no signature), so
//! the extractor needs no application state beyond `Send + Sync`.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::token::{decode, extract_bearer_token};

/// Authenticated caller extractor: verified, unexpired token claims.
///
/// Handlers needing the full user record load it from the repository
/// with the claims' subject ID.
#[derive(Debug)]
pub struct AuthUser(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = decode(&token).ok_or(AuthError::InvalidToken)?;

        if Utc::now().timestamp() >= claims.exp {
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthUser(claims))
    }
}
