//! HTTP Basic authentication extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// The username of a request whose Basic credentials passed the configured verifier.
///
/// Add this as a handler argument to require authentication; rejection answers 401 with a
/// `WWW-Authenticate: Basic` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::MissingCredentials)?;

        if !state
            .verifier
            .verify(basic.username(), basic.password())
            .await?
        {
            return Err(AuthError::InvalidCredentials(basic.username().to_string()).into());
        }

        Ok(Self(basic.username().to_string()))
    }
}
