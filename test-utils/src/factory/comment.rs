//! Comment factory for creating test comment entities.
//!
//! Creates comments attached to an existing place and authored by an existing
//! user; both ids are required arguments because of the foreign keys.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let comment = CommentFactory::new(&db, place.id, user.id)
///     .text("Lovely spot")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    text: String,
    post_date: DateTime<Utc>,
    place_id: i32,
    creator_id: i32,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Comment {id}"` where id is auto-incremented
    /// - post_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `place_id` - Id of the parent place (must exist)
    /// - `creator_id` - Id of the authoring user (must exist)
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, place_id: i32, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            text: format!("Comment {}", id),
            post_date: Utc::now(),
            place_id,
            creator_id,
        }
    }

    /// Sets the comment text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the post date for the comment.
    pub fn post_date(mut self, post_date: DateTime<Utc>) -> Self {
        self.post_date = post_date;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(self.text),
            post_date: ActiveValue::Set(self.post_date),
            place_id: ActiveValue::Set(self.place_id),
            creator_id: ActiveValue::Set(self.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
///
/// Shorthand for `CommentFactory::new(db, place_id, creator_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `place_id` - Id of the parent place
/// - `creator_id` - Id of the authoring user
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    place_id: i32,
    creator_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, place_id, creator_id).build().await
}
