//! Route point factory for creating test point entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test route points with customizable coordinates.
pub struct RoutePointFactory<'a> {
    db: &'a DatabaseConnection,
    latitude: f64,
    longitude: f64,
    route_id: Option<i32>,
}

impl<'a> RoutePointFactory<'a> {
    /// Creates a new RoutePointFactory attached to `route_id`.
    ///
    /// Coordinates default to a small, unique offset from (40.0, -74.0) so that
    /// consecutive points are distinguishable.
    pub fn new(db: &'a DatabaseConnection, route_id: i32) -> Self {
        let offset = (next_id() % 1000) as f64 / 1000.0;
        Self {
            db,
            latitude: 40.0 + offset,
            longitude: -74.0 + offset,
            route_id: Some(route_id),
        }
    }

    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    /// Overrides the parent reference, `None` leaves the point unassigned.
    pub fn route_id(mut self, route_id: Option<i32>) -> Self {
        self.route_id = route_id;
        self
    }

    /// Builds and inserts the point entity into the database.
    pub async fn build(self) -> Result<entity::route_point::Model, DbErr> {
        entity::route_point::ActiveModel {
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            route_id: ActiveValue::Set(self.route_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a point with default coordinates for `route_id`.
pub async fn create_route_point(
    db: &DatabaseConnection,
    route_id: i32,
) -> Result<entity::route_point::Model, DbErr> {
    RoutePointFactory::new(db, route_id).build().await
}
