//! SeaORM entity definitions for the trailbook store.
//!
//! Child tables (`route_point`, `route_photo`) carry a plain indexed `route_id` column with no
//! declared relation, so the store never enforces or cascades on it. Referential checks and
//! the route delete policy live in the server's service layer.

pub mod prelude;

pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;
