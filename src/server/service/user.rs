//! User management. Plaintext passwords are hashed here and never reach the data layer.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::ListParams,
        user::{CreateUserParams, NewUserRecord, UpdateUserParams, User, UserPatch},
    },
    util::password::hash_password,
};

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, storing a bcrypt hash of the supplied password.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        params.validate()?;
        let password_hash = hash_password(params.password).await?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(NewUserRecord {
                name: params.name,
                description: params.description,
                avatar: params.avatar,
                role: params.role,
                password_hash,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("Created user {} ({})", user.id, user.name);

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_paginated(params).await?)
    }

    /// Applies a partial update; a new password is re-hashed before storage.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        params.validate()?;
        let password_hash = match params.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update(UserPatch {
                id: params.id,
                name: params.name,
                description: params.description,
                avatar: params.avatar,
                role: params.role,
                password_hash,
            })
            .await?
            .ok_or_else(user_not_found)?;

        txn.commit().await?;

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).delete(id).await? {
            return Err(user_not_found());
        }

        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
