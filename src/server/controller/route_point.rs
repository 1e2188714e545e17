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
        route_point::{CreateRoutePointDto, RoutePointDto, UpdateRoutePointDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        model::route_point::{CreateRoutePointParams, RoutePoint, UpdateRoutePointParams},
        service::route_point::RoutePointService,
        state::AppState,
    },
};

pub static ROUTE_POINT_TAG: &str = "route_point";

fn into_dtos(points: Vec<RoutePoint>) -> Vec<RoutePointDto> {
    points.into_iter().map(|point| point.into_dto()).collect()
}

/// Attaches a point to a route.
///
/// Also mounted at `POST /points/{route_id}`.
#[utoipa::path(
    post,
    path = "/routes/{route_id}/points/",
    tag = ROUTE_POINT_TAG,
    params(
        ("route_id" = i32, Path, description = "Parent route ID")
    ),
    request_body = CreateRoutePointDto,
    responses(
        (status = 200, description = "Successfully created point", body = RoutePointDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 422, description = "Missing field or coordinate out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route_point(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateRoutePointDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let point = RoutePointService::new(&state.db)
        .create(CreateRoutePointParams::from_dto(route_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}

#[utoipa::path(
    get,
    path = "/routes/{route_id}/points/",
    tag = ROUTE_POINT_TAG,
    params(
        ("route_id" = i32, Path, description = "Parent route ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Points of the route in insertion order", body = Vec<RoutePointDto>),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 422, description = "Limit above 100", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_points_for_route(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let points = RoutePointService::new(&state.db)
        .list_for_route(route_id, pagination.try_into()?)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(points))))
}

#[utoipa::path(
    get,
    path = "/points/",
    tag = ROUTE_POINT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Points of every route ordered by id", body = Vec<RoutePointDto>),
        (status = 422, description = "Limit above 100", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_route_points(
    State(state): State<AppState>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let points = RoutePointService::new(&state.db)
        .list(pagination.try_into()?)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(points))))
}

#[utoipa::path(
    patch,
    path = "/route_point/{point_id}",
    tag = ROUTE_POINT_TAG,
    params(
        ("point_id" = i32, Path, description = "Route point ID")
    ),
    request_body = UpdateRoutePointDto,
    responses(
        (status = 200, description = "Successfully updated point", body = RoutePointDto),
        (status = 404, description = "Route point not found", body = ErrorDto),
        (status = 422, description = "Coordinate out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_route_point(
    State(state): State<AppState>,
    WithRejection(Path(point_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateRoutePointDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let point = RoutePointService::new(&state.db)
        .update(UpdateRoutePointParams::from_dto(point_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/route_points/{point_id}",
    tag = ROUTE_POINT_TAG,
    params(
        ("point_id" = i32, Path, description = "Route point ID")
    ),
    responses(
        (status = 200, description = "Deleted point as it was before deletion", body = RoutePointDto),
        (status = 404, description = "Route point not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route_point(
    State(state): State<AppState>,
    WithRejection(Path(point_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let point = RoutePointService::new(&state.db).delete(point_id).await?;

    Ok((StatusCode::OK, Json(point.into_dto())))
}
