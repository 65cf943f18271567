use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CreateCommentParams, UpdateCommentParams},
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod bulk_delete;
mod queries;
mod update;
