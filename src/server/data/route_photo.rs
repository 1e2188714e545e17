//! Route photo data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::ListParams,
    route_photo::{CreateRoutePhotoParams, RoutePhoto, UpdateRoutePhotoParams},
};

/// Repository providing database operations for route photos.
pub struct RoutePhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoutePhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a photo with its parent reference set.
    pub async fn create(&self, params: CreateRoutePhotoParams) -> Result<RoutePhoto, DbErr> {
        let entity = entity::route_photo::ActiveModel {
            url: ActiveValue::Set(params.url),
            route_id: ActiveValue::Set(Some(params.route_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoutePhoto::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoutePhoto>, DbErr> {
        let entity = entity::prelude::RoutePhoto::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(RoutePhoto::from_entity))
    }

    pub async fn get_paginated(&self, params: ListParams) -> Result<Vec<RoutePhoto>, DbErr> {
        let entities = entity::prelude::RoutePhoto::find()
            .order_by_asc(entity::route_photo::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoutePhoto::from_entity).collect())
    }

    /// Gets a window of one route's photos in insertion order.
    pub async fn get_by_route_id(
        &self,
        route_id: i32,
        params: ListParams,
    ) -> Result<Vec<RoutePhoto>, DbErr> {
        let entities = entity::prelude::RoutePhoto::find()
            .filter(entity::route_photo::Column::RouteId.eq(route_id))
            .order_by_asc(entity::route_photo::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoutePhoto::from_entity).collect())
    }

    pub async fn update(
        &self,
        params: UpdateRoutePhotoParams,
    ) -> Result<Option<RoutePhoto>, DbErr> {
        let Some(photo) = entity::prelude::RoutePhoto::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let Some(url) = params.url else {
            return Ok(Some(RoutePhoto::from_entity(photo)));
        };

        let mut active_model: entity::route_photo::ActiveModel = photo.into();
        active_model.url = ActiveValue::Set(Some(url));

        let updated = active_model.update(self.db).await?;

        Ok(Some(RoutePhoto::from_entity(updated)))
    }

    /// Deletes a photo, returning its state prior to deletion.
    pub async fn delete(&self, id: i32) -> Result<Option<RoutePhoto>, DbErr> {
        let Some(photo) = entity::prelude::RoutePhoto::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::RoutePhoto::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(RoutePhoto::from_entity(photo)))
    }

    /// Deletes every photo of a route, returning how many were removed.
    pub async fn delete_by_route_id(&self, route_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RoutePhoto::delete_many()
            .filter(entity::route_photo::Column::RouteId.eq(route_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
