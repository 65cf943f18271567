//! Comment data repository for database operations.
//!
//! Provides the `CommentRepository` for managing comment records, including
//! the author-expanded reads used by the place detail and feed endpoints and
//! the bulk deletes that power both cascade procedures.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{CreateCommentParams, UpdateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment row on the given place.
    ///
    /// # Arguments
    /// - `place_id` - Parent place (verified by the caller; enforced by the FK)
    /// - `params` - Text, post date, and author
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        place_id: i32,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            post_date: ActiveValue::Set(params.post_date),
            place_id: ActiveValue::Set(place_id),
            creator_id: ActiveValue::Set(params.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Comment found
    /// - `Ok(None)` - No comment with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        comment_id: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Gets all comments on a place with their authors expanded, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment, author)>)` - Comments on the place (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_place_with_authors(
        &self,
        place_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PlaceId.eq(place_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::PostDate)
            .all(self.db)
            .await
    }

    /// Gets all comments with their authors expanded, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment, author)>)` - All comments (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_authors(
        &self,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::comment::Column::PostDate)
            .all(self.db)
            .await
    }

    /// Replaces the text and post date of an already-fetched comment.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated comment
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        comment: entity::comment::Model,
        params: UpdateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        let mut active: entity::comment::ActiveModel = comment.into();
        active.text = ActiveValue::Set(params.text);
        active.post_date = ActiveValue::Set(params.post_date);

        active.update(self.db).await
    }

    /// Deletes a comment row.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted (or no matching row)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, comment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every comment on the given place.
    ///
    /// Used by the place cascade before the place row itself is removed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of comments deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_place(&self, place_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::PlaceId.eq(place_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every comment authored by the user or attached to one of the
    /// given places.
    ///
    /// This is the comment phase of the profile cascade: the user's comments
    /// on other users' places disappear together with all comments on the
    /// user's own places.
    ///
    /// # Arguments
    /// - `creator_id` - Author whose comments are removed everywhere
    /// - `place_ids` - Places whose comment threads are removed entirely
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of comments deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_creator_or_places(
        &self,
        creator_id: i32,
        place_ids: &[i32],
    ) -> Result<u64, DbErr> {
        let mut condition =
            Condition::any().add(entity::comment::Column::CreatorId.eq(creator_id));
        if !place_ids.is_empty() {
            condition = condition.add(entity::comment::Column::PlaceId.is_in(place_ids.to_vec()));
        }

        let result = entity::prelude::Comment::delete_many()
            .filter(condition)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
