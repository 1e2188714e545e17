//! Wire-level DTOs shared by the HTTP boundary.
//!
//! These are the request and response bodies of the API. Server-side domain models in
//! `server::model` convert to and from these types at the controller boundary.

pub mod api;
pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;
