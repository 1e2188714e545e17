//! HTTP request handlers.
//!
//! Handlers parse the request into DTOs, convert them into domain parameters, call the
//! matching service and convert the result back into a DTO. Every handler carries a
//! `#[utoipa::path]` annotation so the router can assemble the OpenAPI document.

pub mod auth;
pub mod param;
pub mod route;
pub mod route_photo;
pub mod route_point;
pub mod user;

#[cfg(test)]
mod test;
