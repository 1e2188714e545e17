//! Route photo operations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{route::RouteRepository, route_photo::RoutePhotoRepository},
    error::AppError,
    model::{
        pagination::ListParams,
        route_photo::{CreateRoutePhotoParams, RoutePhoto, UpdateRoutePhotoParams},
    },
};

fn photo_not_found() -> AppError {
    AppError::NotFound("RoutePhoto not found".to_string())
}

pub struct RoutePhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoutePhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a new photo to an existing route
    pub async fn create(&self, params: CreateRoutePhotoParams) -> Result<RoutePhoto, AppError> {
        let txn = self.db.begin().await?;

        if !RouteRepository::new(&txn).exists(params.route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        let photo = RoutePhotoRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(photo)
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<RoutePhoto>, AppError> {
        Ok(RoutePhotoRepository::new(self.db)
            .get_paginated(params)
            .await?)
    }

    pub async fn list_for_route(
        &self,
        route_id: i32,
        params: ListParams,
    ) -> Result<Vec<RoutePhoto>, AppError> {
        if !RouteRepository::new(self.db).exists(route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        Ok(RoutePhotoRepository::new(self.db)
            .get_by_route_id(route_id, params)
            .await?)
    }

    pub async fn update(&self, params: UpdateRoutePhotoParams) -> Result<RoutePhoto, AppError> {
        let txn = self.db.begin().await?;

        let photo = RoutePhotoRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(photo_not_found)?;

        txn.commit().await?;

        Ok(photo)
    }

    pub async fn delete(&self, id: i32) -> Result<RoutePhoto, AppError> {
        let txn = self.db.begin().await?;

        let photo = RoutePhotoRepository::new(&txn)
            .delete(id)
            .await?
            .ok_or_else(photo_not_found)?;

        txn.commit().await?;

        Ok(photo)
    }
}
