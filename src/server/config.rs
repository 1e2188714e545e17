use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// What happens to a route's points and photos when the route is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteDeletePolicy {
    /// Only the route row is removed; children keep their now dangling `route_id`.
    #[default]
    Orphan,
    /// Points and photos are removed in the same transaction as the route.
    Cascade,
}

/// Which credential verifier guards the `/users/me` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthBackend {
    /// A single configured username and password.
    Static { username: String, password: String },
    /// Users stored in the `user` table, matched by name.
    Users,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub auth_backend: AuthBackend,
    pub route_delete_policy: RouteDeletePolicy,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a closure over a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| invalid("BIND_ADDR", &bind_addr, "a socket address such as 0.0.0.0:8000"))?;

        let auth_backend = match lookup("AUTH_BACKEND").as_deref() {
            None | Some("static") => AuthBackend::Static {
                username: lookup("AUTH_USERNAME")
                    .ok_or_else(|| ConfigError::MissingEnvVar("AUTH_USERNAME".to_string()))?,
                password: lookup("AUTH_PASSWORD")
                    .ok_or_else(|| ConfigError::MissingEnvVar("AUTH_PASSWORD".to_string()))?,
            },
            Some("users") => AuthBackend::Users,
            Some(other) => return Err(invalid("AUTH_BACKEND", other, "'static' or 'users'")),
        };

        let route_delete_policy = match lookup("ROUTE_DELETE_POLICY").as_deref() {
            None | Some("orphan") => RouteDeletePolicy::Orphan,
            Some("cascade") => RouteDeletePolicy::Cascade,
            Some(other) => {
                return Err(invalid(
                    "ROUTE_DELETE_POLICY",
                    other,
                    "'orphan' or 'cascade'",
                ))
            }
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(invalid("REQUEST_TIMEOUT_SECS", &raw, "a positive integer")),
            },
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            auth_backend,
            route_delete_policy,
            request_timeout,
        })
    }
}

fn invalid(name: &str, value: &str, expected: &str) -> AppError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
    .into()
}
