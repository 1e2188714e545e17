use crate::server::{
    data::route::RouteRepository,
    model::{
        pagination::ListParams,
        route::{CreateRouteParams, UpdateRouteParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
