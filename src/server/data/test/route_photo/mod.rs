use crate::server::{
    data::route_photo::RoutePhotoRepository,
    model::{
        pagination::ListParams,
        route_photo::{CreateRoutePhotoParams, UpdateRoutePhotoParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
