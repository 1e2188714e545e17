mod route;
mod route_photo;
mod user;
