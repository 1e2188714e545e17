//! Route point data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::ListParams,
    route_point::{CreateRoutePointParams, RoutePoint, UpdateRoutePointParams},
};

/// Repository providing database operations for route points.
pub struct RoutePointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoutePointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a point with its parent reference set.
    ///
    /// The caller is responsible for checking that the route exists.
    pub async fn create(&self, params: CreateRoutePointParams) -> Result<RoutePoint, DbErr> {
        let entity = entity::route_point::ActiveModel {
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            route_id: ActiveValue::Set(Some(params.route_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoutePoint::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoutePoint>, DbErr> {
        let entity = entity::prelude::RoutePoint::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(RoutePoint::from_entity))
    }

    /// Gets a window of all points ordered by id, regardless of parent.
    pub async fn get_paginated(&self, params: ListParams) -> Result<Vec<RoutePoint>, DbErr> {
        let entities = entity::prelude::RoutePoint::find()
            .order_by_asc(entity::route_point::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoutePoint::from_entity).collect())
    }

    /// Gets a window of one route's points in insertion order.
    pub async fn get_by_route_id(
        &self,
        route_id: i32,
        params: ListParams,
    ) -> Result<Vec<RoutePoint>, DbErr> {
        let entities = entity::prelude::RoutePoint::find()
            .filter(entity::route_point::Column::RouteId.eq(route_id))
            .order_by_asc(entity::route_point::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoutePoint::from_entity).collect())
    }

    /// Applies the coordinates present in `params`; `route_id` is never touched.
    pub async fn update(
        &self,
        params: UpdateRoutePointParams,
    ) -> Result<Option<RoutePoint>, DbErr> {
        let Some(point) = entity::prelude::RoutePoint::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(RoutePoint::from_entity(point)));
        }

        let mut active_model: entity::route_point::ActiveModel = point.into();
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(RoutePoint::from_entity(updated)))
    }

    /// Deletes a point, returning its state prior to deletion.
    pub async fn delete(&self, id: i32) -> Result<Option<RoutePoint>, DbErr> {
        let Some(point) = entity::prelude::RoutePoint::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::RoutePoint::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(RoutePoint::from_entity(point)))
    }

    /// Deletes every point of a route.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of points removed
    pub async fn delete_by_route_id(&self, route_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RoutePoint::delete_many()
            .filter(entity::route_point::Column::RouteId.eq(route_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
