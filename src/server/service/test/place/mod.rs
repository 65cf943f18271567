use super::{geocoder_client, image_client};
use crate::server::{
    data::{comment::CommentRepository, favorite::FavoriteRepository, place::PlaceRepository},
    error::{upstream::UpstreamError, AppError},
    model::place::{CreatePlaceParams, UpdatePlaceParams},
    service::place::PlaceService,
};
use chrono::Utc;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, stub};

mod create;
mod delete;
mod toggle_favorite;
