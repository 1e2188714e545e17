use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no usable `Authorization: Basic` header.
    #[error("Missing basic authentication credentials")]
    MissingCredentials,

    /// The supplied username and password were rejected by the credential verifier.
    #[error("Incorrect username or password for '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants answer 401 Unauthorized with a `WWW-Authenticate: Basic` challenge.
/// The rejected username is logged at debug level but never echoed to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic")],
            Json(ErrorDto {
                error: "Incorrect username or password".to_string(),
            }),
        )
            .into_response()
    }
}
