//! Comment DTOs and validation bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Maximum length of a comment.
pub const TEXT_MAX_LEN: usize = 377;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub post_date: DateTime<Utc>,
    pub place_id: i32,
    pub creator_id: i32,
}

impl CommentDto {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            post_date: entity.post_date,
            place_id: entity.place_id,
            creator_id: entity.creator_id,
        }
    }
}

/// A comment with its author expanded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentWithAuthorDto {
    pub id: i32,
    pub text: String,
    pub post_date: DateTime<Utc>,
    pub place_id: i32,
    pub creator: UserDto,
}

/// Feed representation of a comment: the post date is omitted, the author
/// and the annotated place are expanded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedCommentDto {
    pub id: i32,
    pub text: String,
    pub creator: UserDto,
    pub place: super::place::PlaceDto,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub text: String,
    pub post_date: DateTime<Utc>,
    pub creator_id: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCommentDto {
    pub text: String,
    pub post_date: DateTime<Utc>,
}
