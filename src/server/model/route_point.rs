//! Domain models for route points.

use crate::{
    model::route_point::{CreateRoutePointDto, RoutePointDto, UpdateRoutePointDto},
    server::error::AppError,
};

/// One latitude/longitude vertex of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    /// Parent route. May reference a route that no longer exists after an orphaning delete.
    pub route_id: Option<i32>,
}

impl RoutePoint {
    pub fn from_entity(entity: entity::route_point::Model) -> Self {
        Self {
            id: entity.id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            route_id: entity.route_id,
        }
    }

    pub fn into_dto(self) -> RoutePointDto {
        RoutePointDto {
            id: self.id,
            latitude: self.latitude,
            longitude: self.longitude,
            route_id: self.route_id,
        }
    }
}

/// Parameters for attaching a new point to a route.
#[derive(Debug, Clone)]
pub struct CreateRoutePointParams {
    pub route_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateRoutePointParams {
    pub fn from_dto(route_id: i32, dto: CreateRoutePointDto) -> Self {
        Self {
            route_id,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }

    /// Checks both coordinates are finite and within their geographic range.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)
    }
}

/// Typed partial update for a route point.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoutePointParams {
    pub id: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdateRoutePointParams {
    pub fn from_dto(id: i32, dto: UpdateRoutePointDto) -> Self {
        Self {
            id,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }

    /// Checks whichever coordinates are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(latitude) = self.latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = self.longitude {
            validate_longitude(longitude)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }
}

fn validate_latitude(latitude: f64) -> Result<(), AppError> {
    if latitude.is_finite() && (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "latitude {} is outside [-90, 90]",
            latitude
        )))
    }
}

fn validate_longitude(longitude: f64) -> Result<(), AppError> {
    if longitude.is_finite() && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "longitude {} is outside [-180, 180]",
            longitude
        )))
    }
}
