use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::CurrentUserDto},
    server::{error::AppError, middleware::auth::AuthenticatedUser},
};

pub static AUTH_TAG: &str = "auth";

/// Returns the username of the authenticated caller.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Credentials accepted", body = CurrentUserDto),
        (status = 401, description = "Missing or invalid Basic credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = [])),
)]
pub async fn get_current_user(
    AuthenticatedUser(username): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(CurrentUserDto { username })))
}
