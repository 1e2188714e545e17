//! HTTP-level tests driving the full router with `tower::ServiceExt::oneshot`.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::RouteDeletePolicy,
    router::router,
    service::auth::{CredentialVerifier, StaticCredentialVerifier, UserTableVerifier},
    state::AppState,
};


/// `admin:secret`, matching the static credential every test app is built with.
const VALID_BASIC: &str = "Basic YWRtaW46c2VjcmV0";

/// Test application plus the context that owns its in-memory database.
struct TestApp {
    router: Router,
    test: TestContext,
}

impl TestApp {
    /// Builds an app with every table and the static `admin:secret` credential.
    async fn new(policy: RouteDeletePolicy) -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(
            StaticCredentialVerifier::new("admin".to_string(), "secret".to_string())
                .await
                .unwrap(),
        );

        Self::with_verifier(test, verifier, policy)
    }

    /// Builds an app whose credentials are checked against the user table.
    async fn with_user_table() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();

        Self::with_verifier(
            test,
            Arc::new(UserTableVerifier::new(db)),
            RouteDeletePolicy::Orphan,
        )
    }

    fn with_verifier(
        test: TestContext,
        verifier: Arc<dyn CredentialVerifier>,
        policy: RouteDeletePolicy,
    ) -> Self {
        let db = test.db.as_ref().unwrap().clone();
        let router = router(
            AppState::new(db, verifier, policy),
            Duration::from_secs(30),
        );

        Self { router, test }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Sends a request, returning status, headers and the body parsed as JSON.
    ///
    /// An empty body parses as `Value::Null`.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> (StatusCode, HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, headers, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self.send(Method::GET, uri, None, None).await;
        (status, body)
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, _, body) = self.send(Method::POST, uri, Some(body), None).await;
        (status, body)
    }

    async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, _, body) = self.send(Method::PATCH, uri, Some(body), None).await;
        (status, body)
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self.send(Method::DELETE, uri, None, None).await;
        (status, body)
    }

    /// Creates a route through the API and returns its id.
    async fn create_route(&self, title: &str) -> i64 {
        let (status, body) = self
            .post(
                "/create_route/",
                json!({
                    "title": title,
                    "region": "Dolomites",
                    "description": "Via ferrata",
                    "creator": "admin",
                    "is_private": false
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["id"].as_i64().unwrap()
    }
}

/// Ids of every element of a JSON array response.
fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
