use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        route::{CreateRouteDto, RouteDto, UpdateRouteDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        model::route::{CreateRouteParams, UpdateRouteParams},
        service::route::RouteService,
        state::AppState,
    },
};

pub static ROUTE_TAG: &str = "route";

#[utoipa::path(
    post,
    path = "/create_route/",
    tag = ROUTE_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 200, description = "Successfully created route", body = RouteDto),
        (status = 400, description = "Malformed JSON body", body = ErrorDto),
        (status = 422, description = "Missing or invalid route field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateRouteDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db, state.route_delete_policy)
        .create(CreateRouteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

#[utoipa::path(
    get,
    path = "/routes/",
    tag = ROUTE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Routes ordered by id", body = Vec<RouteDto>),
        (status = 422, description = "Limit above 100", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_routes(
    State(state): State<AppState>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let routes = RouteService::new(&state.db, state.route_delete_policy)
        .list(pagination.try_into()?)
        .await?;

    let dtos: Vec<RouteDto> = routes.into_iter().map(|route| route.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/routes/{route_id}",
    tag = ROUTE_TAG,
    params(
        ("route_id" = i32, Path, description = "Route ID")
    ),
    responses(
        (status = 200, description = "Route found", body = RouteDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db, state.route_delete_policy)
        .get(route_id)
        .await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/routes/{route_id}",
    tag = ROUTE_TAG,
    params(
        ("route_id" = i32, Path, description = "Route ID")
    ),
    request_body = UpdateRouteDto,
    responses(
        (status = 200, description = "Successfully updated route", body = RouteDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 422, description = "Invalid route field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_route(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateRouteDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db, state.route_delete_policy)
        .update(UpdateRouteParams::from_dto(route_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/routes/{route_id}",
    tag = ROUTE_TAG,
    params(
        ("route_id" = i32, Path, description = "Route ID")
    ),
    responses(
        (status = 200, description = "Deleted route as it was before deletion", body = RouteDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db, state.route_delete_policy)
        .delete(route_id)
        .await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}
