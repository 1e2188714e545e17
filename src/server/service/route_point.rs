//! Route point operations. Every write under a route first checks the route exists.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{route::RouteRepository, route_point::RoutePointRepository},
    error::AppError,
    model::{
        pagination::ListParams,
        route_point::{CreateRoutePointParams, RoutePoint, UpdateRoutePointParams},
    },
};

fn point_not_found() -> AppError {
    AppError::NotFound("RoutePoint not found".to_string())
}

pub struct RoutePointService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoutePointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a new point to an existing route.
    ///
    /// Nothing is persisted when the route is missing or a coordinate is out of range.
    pub async fn create(&self, params: CreateRoutePointParams) -> Result<RoutePoint, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        if !RouteRepository::new(&txn).exists(params.route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        let point = RoutePointRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(point)
    }

    /// Lists points across all routes ordered by ID
    pub async fn list(&self, params: ListParams) -> Result<Vec<RoutePoint>, AppError> {
        Ok(RoutePointRepository::new(self.db)
            .get_paginated(params)
            .await?)
    }

    /// Lists one route's points in insertion order
    pub async fn list_for_route(
        &self,
        route_id: i32,
        params: ListParams,
    ) -> Result<Vec<RoutePoint>, AppError> {
        if !RouteRepository::new(self.db).exists(route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        Ok(RoutePointRepository::new(self.db)
            .get_by_route_id(route_id, params)
            .await?)
    }

    pub async fn update(&self, params: UpdateRoutePointParams) -> Result<RoutePoint, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let point = RoutePointRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(point_not_found)?;

        txn.commit().await?;

        Ok(point)
    }

    /// Deletes a point, returning it as it was before deletion
    pub async fn delete(&self, id: i32) -> Result<RoutePoint, AppError> {
        let txn = self.db.begin().await?;

        let point = RoutePointRepository::new(&txn)
            .delete(id)
            .await?
            .ok_or_else(point_not_found)?;

        txn.commit().await?;

        Ok(point)
    }
}
