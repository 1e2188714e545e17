//! User domain models and parameters.
//!
//! The domain `User` deliberately has no password field. Password hashes only leave the
//! data layer through `UserCredentials`, which the credential verifier consumes.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::error::AppError,
};

/// bcrypt only reads the first 72 bytes of its input; longer passwords are refused.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Public user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Avatar image reference or URL.
    pub avatar: String,
    /// Optional free-text role; unset by default.
    pub role: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            avatar: entity.avatar,
            role: entity.role,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            description: self.description,
            avatar: self.avatar,
            role: self.role,
        }
    }
}

/// Stored login material for a user.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub password_hash: String,
}

/// Parameters for creating a user, with the password in plaintext.
///
/// The service hashes `password` before anything reaches the repository.
#[derive(Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub role: Option<String>,
    pub password: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            avatar: dto.avatar,
            role: dto.role,
            password: dto.password,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_password(&self.password)
    }
}

/// Typed partial update for a user, with an optional plaintext password.
#[derive(Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            avatar: dto.avatar,
            role: dto.role,
            password: dto.password,
        }
    }

    /// Checks the new password, when one is given.
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.password {
            Some(password) => validate_password(password),
            None => Ok(()),
        }
    }
}

/// Row-level user insert, as handed to the repository.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub role: Option<String>,
    pub password_hash: String,
}

/// Row-level user patch, as handed to the repository.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub password_hash: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.avatar.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::Validation(format!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(())
}
