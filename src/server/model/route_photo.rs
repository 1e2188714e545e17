//! Domain models for route photos.

use crate::model::route_photo::{CreateRoutePhotoDto, RoutePhotoDto, UpdateRoutePhotoDto};

/// One image reference attached to a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePhoto {
    pub id: i32,
    pub url: Option<String>,
    pub route_id: Option<i32>,
}

impl RoutePhoto {
    pub fn from_entity(entity: entity::route_photo::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            route_id: entity.route_id,
        }
    }

    pub fn into_dto(self) -> RoutePhotoDto {
        RoutePhotoDto {
            id: self.id,
            url: self.url,
            route_id: self.route_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoutePhotoParams {
    pub route_id: i32,
    pub url: Option<String>,
}

impl CreateRoutePhotoParams {
    pub fn from_dto(route_id: i32, dto: CreateRoutePhotoDto) -> Self {
        Self {
            route_id,
            url: dto.url,
        }
    }
}

/// Typed partial update for a route photo.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoutePhotoParams {
    pub id: i32,
    pub url: Option<String>,
}

impl UpdateRoutePhotoParams {
    pub fn from_dto(id: i32, dto: UpdateRoutePhotoDto) -> Self {
        Self { id, url: dto.url }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none()
    }
}
