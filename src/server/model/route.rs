//! Domain models for routes.

use chrono::{DateTime, Utc};

use crate::model::route::{CreateRouteDto, RouteDto, UpdateRouteDto};

/// A named trail with its descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Unique identifier for the route.
    pub id: i32,
    pub title: String,
    pub region: Option<String>,
    pub description: String,
    /// Free-text identifier of whoever created the route; not a user reference.
    pub creator: String,
    /// Assigned once by the server when the route is created.
    pub created_at: DateTime<Utc>,
    pub is_private: bool,
}

impl Route {
    /// Converts an entity model to a route domain model at the repository boundary.
    pub fn from_entity(entity: entity::route::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            region: entity.region,
            description: entity.description,
            creator: entity.creator,
            created_at: entity.created_at,
            is_private: entity.is_private,
        }
    }

    /// Converts the route domain model to a DTO for API responses.
    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.id,
            title: self.title,
            region: self.region,
            description: self.description,
            creator: self.creator,
            created_at: self.created_at,
            is_private: self.is_private,
        }
    }
}

/// Parameters for creating a new route.
///
/// `created_at` is not part of the parameters; the repository stamps it.
#[derive(Debug, Clone)]
pub struct CreateRouteParams {
    pub title: String,
    pub region: Option<String>,
    pub description: String,
    pub creator: String,
    pub is_private: bool,
}

impl CreateRouteParams {
    pub fn from_dto(dto: CreateRouteDto) -> Self {
        Self {
            title: dto.title,
            region: dto.region,
            description: dto.description,
            creator: dto.creator,
            is_private: dto.is_private,
        }
    }
}

/// Typed partial update for a route.
///
/// Each `Some` field replaces the stored value; each `None` leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRouteParams {
    /// ID of the route to update.
    pub id: i32,
    pub title: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
}

impl UpdateRouteParams {
    pub fn from_dto(id: i32, dto: UpdateRouteDto) -> Self {
        Self {
            id,
            title: dto.title,
            region: dto.region,
            description: dto.description,
            is_private: dto.is_private,
        }
    }

    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.region.is_none()
            && self.description.is_none()
            && self.is_private.is_none()
    }
}
