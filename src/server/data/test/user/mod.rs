use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::ListParams,
        user::{NewUserRecord, UserPatch},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_name;
mod get_paginated;
