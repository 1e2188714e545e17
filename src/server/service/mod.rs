//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Parent-route existence checks, coordinate validation, password hashing
//! - **Transaction Management**: Every operation runs its check and writes in one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Missing rows surface here as `AppError::NotFound` naming the entity type.

pub mod auth;
pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;
