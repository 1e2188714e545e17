//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a route with the requested number of points and photos attached.
///
/// Points are inserted in order, so their ids follow insertion order.
///
/// # Arguments
/// - `db` - Database connection
/// - `points` - Number of points to attach
/// - `photos` - Number of photos to attach
///
/// # Returns
/// - `Ok((route, points, photos))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_with_children(
    db: &DatabaseConnection,
    points: usize,
    photos: usize,
) -> Result<
    (
        entity::route::Model,
        Vec<entity::route_point::Model>,
        Vec<entity::route_photo::Model>,
    ),
    DbErr,
> {
    let route = crate::factory::route::create_route(db).await?;

    let mut created_points = Vec::with_capacity(points);
    for _ in 0..points {
        created_points.push(crate::factory::route_point::create_route_point(db, route.id).await?);
    }

    let mut created_photos = Vec::with_capacity(photos);
    for _ in 0..photos {
        created_photos.push(crate::factory::route_photo::create_route_photo(db, route.id).await?);
    }

    Ok((route, created_points, created_photos))
}
