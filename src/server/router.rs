//! Route table, OpenAPI document and the middleware stack wrapped around them.

use std::time::Duration;

use axum::{http::StatusCode, routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        Components,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, route, route_photo, route_point, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "trailbook",
        description = "CRUD backend for routes, their points and photos, and users"
    ),
    modifiers(&BasicAuthAddon),
    tags(
        (name = "route", description = "Named trails"),
        (name = "route_point", description = "Latitude/longitude vertices of a route"),
        (name = "route_photo", description = "Image references of a route"),
        (name = "user", description = "User profiles"),
        (name = "auth", description = "HTTP Basic authentication"),
    )
)]
struct ApiDoc;

/// Registers the `basic_auth` scheme referenced by protected endpoints.
struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::new)
            .add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
    }
}

/// Builds the application router with state and middleware applied.
///
/// # Arguments
/// - `state` - Shared application state
/// - `request_timeout` - Time bound for each request; exceeding it answers 408
///
/// # Returns
/// - `Router` - Ready to be served
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(route::create_route))
        .routes(routes!(route::list_routes))
        .routes(routes!(
            route::get_route,
            route::update_route,
            route::delete_route
        ))
        .routes(routes!(
            route_point::create_route_point,
            route_point::list_points_for_route
        ))
        .route(
            "/points/{route_id}",
            post(route_point::create_route_point),
        )
        .routes(routes!(route_point::list_route_points))
        .routes(routes!(route_point::update_route_point))
        .routes(routes!(route_point::delete_route_point))
        .routes(routes!(
            route_photo::create_route_photo,
            route_photo::list_photos_for_route
        ))
        .route(
            "/images/{route_id}",
            post(route_photo::create_route_photo),
        )
        .routes(routes!(route_photo::list_route_photos))
        .routes(routes!(
            route_photo::update_route_photo,
            route_photo::delete_route_photo
        ))
        .routes(routes!(user::create_user, user::list_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(auth::get_current_user))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
