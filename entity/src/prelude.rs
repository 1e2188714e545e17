pub use super::route::Entity as Route;
pub use super::route_photo::Entity as RoutePhoto;
pub use super::route_point::Entity as RoutePoint;
pub use super::user::Entity as User;
