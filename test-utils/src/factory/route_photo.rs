//! Route photo factory for creating test photo entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test route photos.
pub struct RoutePhotoFactory<'a> {
    db: &'a DatabaseConnection,
    url: Option<String>,
    route_id: Option<i32>,
}

impl<'a> RoutePhotoFactory<'a> {
    /// Creates a new RoutePhotoFactory attached to `route_id`.
    ///
    /// Defaults the url to `"http://example.com/photo{id}.jpg"`.
    pub fn new(db: &'a DatabaseConnection, route_id: i32) -> Self {
        Self {
            db,
            url: Some(format!("http://example.com/photo{}.jpg", next_id())),
            route_id: Some(route_id),
        }
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn route_id(mut self, route_id: Option<i32>) -> Self {
        self.route_id = route_id;
        self
    }

    /// Builds and inserts the photo entity into the database.
    pub async fn build(self) -> Result<entity::route_photo::Model, DbErr> {
        entity::route_photo::ActiveModel {
            url: ActiveValue::Set(self.url),
            route_id: ActiveValue::Set(self.route_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo with a default url for `route_id`.
pub async fn create_route_photo(
    db: &DatabaseConnection,
    route_id: i32,
) -> Result<entity::route_photo::Model, DbErr> {
    RoutePhotoFactory::new(db, route_id).build().await
}
