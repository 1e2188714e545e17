//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let route = factory::create_route(&db).await?;
//!     let point = factory::create_route_point(&db, route.id).await?;
//!
//!     let (route, points, photos) = factory::helpers::create_route_with_children(&db, 3, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let route = factory::route::RouteFactory::new(&db)
//!     .title("Mountain Hike")
//!     .is_private(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;

pub use route::create_route;
pub use route_photo::create_route_photo;
pub use route_point::create_route_point;
pub use user::create_user;
