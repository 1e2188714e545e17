//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::RouteDeletePolicy, service::auth::CredentialVerifier};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn CredentialVerifier>` is a reference-counted pointer
/// - `RouteDeletePolicy` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Credential check used by the Basic authentication extractor.
    pub verifier: Arc<dyn CredentialVerifier>,

    /// What route deletion does to the route's points and photos.
    pub route_delete_policy: RouteDeletePolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verifier` - Credential verifier selected from configuration
    /// - `route_delete_policy` - Child handling for route deletion
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        verifier: Arc<dyn CredentialVerifier>,
        route_delete_policy: RouteDeletePolicy,
    ) -> Self {
        Self {
            db,
            verifier,
            route_delete_policy,
        }
    }
}
