use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. Never carries the password or its hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub description: String,
    pub avatar: String,
    #[serde(default)]
    pub role: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeleteUserDto {
    pub ok: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CurrentUserDto {
    pub username: String,
}
