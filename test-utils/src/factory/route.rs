//! Route factory for creating test route entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test routes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let route = RouteFactory::new(&db)
///     .title("City Tour")
///     .creator("Bob")
///     .build()
///     .await?;
/// ```
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    region: Option<String>,
    description: String,
    creator: String,
    created_at: DateTime<Utc>,
    is_private: bool,
}

impl<'a> RouteFactory<'a> {
    /// Creates a new RouteFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Route {id}"` where id is auto-incremented
    /// - region: `Some("Region {id}")`
    /// - description: `"Description for route {id}"`
    /// - creator: `"creator_{id}"`
    /// - created_at: now
    /// - is_private: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Route {}", id),
            region: Some(format!("Region {}", id)),
            description: format!("Description for route {}", id),
            creator: format!("creator_{}", id),
            created_at: Utc::now(),
            is_private: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Builds and inserts the route entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::route::Model)` - Created route entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::route::Model, DbErr> {
        entity::route::ActiveModel {
            title: ActiveValue::Set(self.title),
            region: ActiveValue::Set(self.region),
            description: ActiveValue::Set(self.description),
            creator: ActiveValue::Set(self.creator),
            created_at: ActiveValue::Set(self.created_at),
            is_private: ActiveValue::Set(self.is_private),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a route with default values.
///
/// Shorthand for `RouteFactory::new(db).build().await`.
pub async fn create_route(db: &DatabaseConnection) -> Result<entity::route::Model, DbErr> {
    RouteFactory::new(db).build().await
}
