//! Credential verification for HTTP Basic authentication.
//!
//! The `AuthenticatedUser` extractor holds an `Arc<dyn CredentialVerifier>` from application
//! state, so the backing store is chosen once at startup from `AUTH_BACKEND`.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use subtle::ConstantTimeEq;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    util::password::{hash_password, verify_password},
};

/// Checks a username/password pair against some credential store.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns whether the pair is valid. Unknown users are `Ok(false)`, not an error.
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AppError>;
}

/// A single configured account whose password is hashed once at startup.
pub struct StaticCredentialVerifier {
    username: String,
    password_hash: String,
}

impl StaticCredentialVerifier {
    /// Hashes `password` and keeps only the hash.
    pub async fn new(username: String, password: String) -> Result<Self, AppError> {
        let password_hash = hash_password(password).await?;

        Ok(Self {
            username,
            password_hash,
        })
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let username_matches: bool = username
            .as_bytes()
            .ct_eq(self.username.as_bytes())
            .into();

        // Always run bcrypt so a wrong username costs the same as a wrong password.
        let password_matches =
            verify_password(password.to_string(), self.password_hash.clone()).await?;

        Ok(username_matches && password_matches)
    }
}

/// Verifies against the bcrypt hashes stored in the user table.
pub struct UserTableVerifier {
    db: DatabaseConnection,
}

impl UserTableVerifier {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialVerifier for UserTableVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let Some(credentials) = UserRepository::new(&self.db)
            .find_credentials_by_name(username)
            .await?
        else {
            return Ok(false);
        };

        verify_password(password.to_string(), credentials.password_hash).await
    }
}
