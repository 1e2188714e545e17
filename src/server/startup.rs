use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{AuthBackend, Config},
    error::AppError,
    service::auth::{CredentialVerifier, StaticCredentialVerifier, UserTableVerifier},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations so that every table
/// exists before the first request. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the credential verifier selected by `AUTH_BACKEND`.
///
/// The static backend hashes its configured password here, once, so the plaintext is not
/// kept in memory afterwards.
///
/// # Returns
/// - `Ok(Arc<dyn CredentialVerifier>)` - Verifier ready to be placed in `AppState`
/// - `Err(AppError::PasswordHashErr)` - Failed to hash the static password
pub async fn build_credential_verifier(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<Arc<dyn CredentialVerifier>, AppError> {
    let verifier: Arc<dyn CredentialVerifier> = match &config.auth_backend {
        AuthBackend::Static { username, password } => {
            tracing::info!("Using static credential for user '{}'", username);
            Arc::new(StaticCredentialVerifier::new(username.clone(), password.clone()).await?)
        }
        AuthBackend::Users => {
            tracing::info!("Using user table for credential checks");
            Arc::new(UserTableVerifier::new(db.clone()))
        }
    };

    Ok(verifier)
}
