//! Password hashing helpers backed by bcrypt.
//!
//! Hashing and verification are CPU-bound, so both run on tokio's blocking pool.

use crate::server::error::AppError;

/// bcrypt work factor. Tests use the minimum so suites stay fast.
const PASSWORD_COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

/// Hashes a plaintext password.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - bcrypt hash including salt and cost
/// - `Err(AppError::PasswordHashErr)` - bcrypt rejected the input
/// - `Err(AppError::InternalError)` - The blocking task panicked or was cancelled
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_COST))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hashed)
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// A stored value that is not a valid bcrypt hash never matches; it is not an error.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or hash is malformed
/// - `Err(AppError::InternalError)` - The blocking task panicked or was cancelled
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Password verification task failed: {}", e))
        })?;

    Ok(matches.unwrap_or(false))
}
