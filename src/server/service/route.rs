//! Route lifecycle, including the configurable fate of a deleted route's children.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::RouteDeletePolicy,
    data::{
        route::RouteRepository, route_photo::RoutePhotoRepository,
        route_point::RoutePointRepository,
    },
    error::AppError,
    model::{
        pagination::ListParams,
        route::{CreateRouteParams, Route, UpdateRouteParams},
    },
};

fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
    delete_policy: RouteDeletePolicy,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection, delete_policy: RouteDeletePolicy) -> Self {
        Self { db, delete_policy }
    }

    /// Creates a new route
    pub async fn create(&self, params: CreateRouteParams) -> Result<Route, AppError> {
        let txn = self.db.begin().await?;

        let route = RouteRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(route)
    }

    /// Gets a route by ID
    pub async fn get(&self, id: i32) -> Result<Route, AppError> {
        RouteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(route_not_found)
    }

    /// Lists routes ordered by ID
    pub async fn list(&self, params: ListParams) -> Result<Vec<Route>, AppError> {
        Ok(RouteRepository::new(self.db).get_paginated(params).await?)
    }

    /// Applies a partial update to a route
    pub async fn update(&self, params: UpdateRouteParams) -> Result<Route, AppError> {
        let txn = self.db.begin().await?;

        let route = RouteRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(route_not_found)?;

        txn.commit().await?;

        Ok(route)
    }

    /// Deletes a route and, under the cascade policy, its points and photos.
    ///
    /// Returns the route as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Route, AppError> {
        let txn = self.db.begin().await?;

        let route = RouteRepository::new(&txn)
            .delete(id)
            .await?
            .ok_or_else(route_not_found)?;

        match self.delete_policy {
            RouteDeletePolicy::Orphan => {
                tracing::info!("Deleted route {}, children left in place", id);
            }
            RouteDeletePolicy::Cascade => {
                let points = RoutePointRepository::new(&txn).delete_by_route_id(id).await?;
                let photos = RoutePhotoRepository::new(&txn).delete_by_route_id(id).await?;
                tracing::info!(
                    "Deleted route {} with {} points and {} photos",
                    id,
                    points,
                    photos
                );
            }
        }

        txn.commit().await?;

        Ok(route)
    }
}
