//! Route data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::ListParams,
    route::{CreateRouteParams, Route, UpdateRouteParams},
};

/// Repository providing database operations for routes.
pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    /// Creates a new RouteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new route, stamping `created_at` with the current time.
    ///
    /// # Returns
    /// - `Ok(Route)` - The stored route including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRouteParams) -> Result<Route, DbErr> {
        let entity = entity::route::ActiveModel {
            title: ActiveValue::Set(params.title),
            region: ActiveValue::Set(params.region),
            description: ActiveValue::Set(params.description),
            creator: ActiveValue::Set(params.creator),
            created_at: ActiveValue::Set(Utc::now()),
            is_private: ActiveValue::Set(params.is_private),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Route::from_entity(entity))
    }

    /// Finds a route by id.
    ///
    /// # Returns
    /// - `Ok(Some(Route))` - Route found
    /// - `Ok(None)` - No route with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Route>, DbErr> {
        let entity = entity::prelude::Route::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Route::from_entity))
    }

    /// Checks whether a route with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Route::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets a window of routes ordered by id.
    pub async fn get_paginated(&self, params: ListParams) -> Result<Vec<Route>, DbErr> {
        let entities = entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Route::from_entity).collect())
    }

    /// Applies the fields present in `params` to an existing route.
    ///
    /// `id`, `creator` and `created_at` are never touched. An empty patch returns the
    /// stored route without issuing an UPDATE.
    ///
    /// # Returns
    /// - `Ok(Some(Route))` - The route after the update
    /// - `Ok(None)` - No route with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateRouteParams) -> Result<Option<Route>, DbErr> {
        let Some(route) = entity::prelude::Route::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Route::from_entity(route)));
        }

        let mut active_model: entity::route::ActiveModel = route.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(region) = params.region {
            active_model.region = ActiveValue::Set(Some(region));
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(is_private) = params.is_private {
            active_model.is_private = ActiveValue::Set(is_private);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Route::from_entity(updated)))
    }

    /// Deletes a route row, returning its state prior to deletion.
    ///
    /// Points and photos are not touched here; the service applies the delete policy.
    ///
    /// # Returns
    /// - `Ok(Some(Route))` - The deleted route
    /// - `Ok(None)` - No route with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Route>, DbErr> {
        let Some(route) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Route::delete_by_id(id).exec(self.db).await?;

        Ok(Some(Route::from_entity(route)))
    }
}
