//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Password hashes are written through `NewUserRecord` / `UserPatch` and only read back
//! through `find_credentials_by_name`; every other query returns the password-free `User`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::ListParams,
    user::{NewUserRecord, User, UserCredentials, UserPatch},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user whose password has already been hashed.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, record: NewUserRecord) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(record.name),
            description: ActiveValue::Set(record.description),
            avatar: ActiveValue::Set(record.avatar),
            role: ActiveValue::Set(record.role),
            password_hash: ActiveValue::Set(record.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the login material of the oldest user with the given name.
    ///
    /// Names are not unique; the lowest id wins so the lookup is deterministic.
    pub async fn find_credentials_by_name(
        &self,
        name: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|user| UserCredentials {
            password_hash: user.password_hash,
        }))
    }

    /// Gets a window of users ordered by id.
    pub async fn get_paginated(&self, params: ListParams) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies the fields present in `patch` to an existing user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, patch: UserPatch) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(patch.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(User::from_entity(user)));
        }

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(name) = patch.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = patch.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(avatar) = patch.avatar {
            active_model.avatar = ActiveValue::Set(avatar);
        }
        if let Some(role) = patch.role {
            active_model.role = ActiveValue::Set(Some(role));
        }
        if let Some(password_hash) = patch.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
