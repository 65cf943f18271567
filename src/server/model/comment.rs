//! Comment operation parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::{CreateCommentDto, UpdateCommentDto};

/// Parameters for creating a comment on a place.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub text: String,
    pub post_date: DateTime<Utc>,
    pub creator_id: i32,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            text: dto.text,
            post_date: dto.post_date,
            creator_id: dto.creator_id,
        }
    }
}

/// Parameters for editing a comment. Both fields are replaced
/// unconditionally.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub text: String,
    pub post_date: DateTime<Utc>,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            text: dto.text,
            post_date: dto.post_date,
        }
    }
}
