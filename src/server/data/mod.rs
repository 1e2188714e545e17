//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait`, so the same repository runs against the
//! shared `DatabaseConnection` or against a `DatabaseTransaction` opened by a service.

pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;

#[cfg(test)]
mod test;
