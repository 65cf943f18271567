use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserFields},
    service::images::StoredImage,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_profile;
