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
        route_photo::{CreateRoutePhotoDto, RoutePhotoDto, UpdateRoutePhotoDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        model::route_photo::{CreateRoutePhotoParams, RoutePhoto, UpdateRoutePhotoParams},
        service::route_photo::RoutePhotoService,
        state::AppState,
    },
};

pub static ROUTE_PHOTO_TAG: &str = "route_photo";

fn into_dtos(photos: Vec<RoutePhoto>) -> Vec<RoutePhotoDto> {
    photos.into_iter().map(|photo| photo.into_dto()).collect()
}

/// Attaches a photo to a route.
///
/// Also mounted at `POST /images/{route_id}`.
#[utoipa::path(
    post,
    path = "/routes/{route_id}/images/",
    tag = ROUTE_PHOTO_TAG,
    params(
        ("route_id" = i32, Path, description = "Parent route ID")
    ),
    request_body = CreateRoutePhotoDto,
    responses(
        (status = 200, description = "Successfully created photo", body = RoutePhotoDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 422, description = "Invalid photo field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route_photo(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateRoutePhotoDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let photo = RoutePhotoService::new(&state.db)
        .create(CreateRoutePhotoParams::from_dto(route_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(photo.into_dto())))
}

#[utoipa::path(
    get,
    path = "/routes/{route_id}/images/",
    tag = ROUTE_PHOTO_TAG,
    params(
        ("route_id" = i32, Path, description = "Parent route ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Photos of the route in insertion order", body = Vec<RoutePhotoDto>),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 422, description = "Limit above 100", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_photos_for_route(
    State(state): State<AppState>,
    WithRejection(Path(route_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let photos = RoutePhotoService::new(&state.db)
        .list_for_route(route_id, pagination.try_into()?)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(photos))))
}

#[utoipa::path(
    get,
    path = "/images/",
    tag = ROUTE_PHOTO_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Photos of every route ordered by id", body = Vec<RoutePhotoDto>),
        (status = 422, description = "Limit above 100", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_route_photos(
    State(state): State<AppState>,
    WithRejection(Query(pagination), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let photos = RoutePhotoService::new(&state.db)
        .list(pagination.try_into()?)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(photos))))
}

#[utoipa::path(
    patch,
    path = "/route_photos/{photo_id}",
    tag = ROUTE_PHOTO_TAG,
    params(
        ("photo_id" = i32, Path, description = "Route photo ID")
    ),
    request_body = UpdateRoutePhotoDto,
    responses(
        (status = 200, description = "Successfully updated photo", body = RoutePhotoDto),
        (status = 404, description = "Route photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_route_photo(
    State(state): State<AppState>,
    WithRejection(Path(photo_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateRoutePhotoDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let photo = RoutePhotoService::new(&state.db)
        .update(UpdateRoutePhotoParams::from_dto(photo_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(photo.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/route_photos/{photo_id}",
    tag = ROUTE_PHOTO_TAG,
    params(
        ("photo_id" = i32, Path, description = "Route photo ID")
    ),
    responses(
        (status = 200, description = "Deleted photo as it was before deletion", body = RoutePhotoDto),
        (status = 404, description = "Route photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route_photo(
    State(state): State<AppState>,
    WithRejection(Path(photo_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let photo = RoutePhotoService::new(&state.db).delete(photo_id).await?;

    Ok((StatusCode::OK, Json(photo.into_dto())))
}
