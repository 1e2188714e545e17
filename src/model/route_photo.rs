use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoutePhotoDto {
    pub id: i32,
    pub url: Option<String>,
    pub route_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateRoutePhotoDto {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateRoutePhotoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
