//! Comment business logic.
//!
//! Creation verifies both ends of the relation (place and author) before the
//! insert so each missing reference surfaces as its own not-found error.
//! Deletion is scoped to a place: a comment that does not belong to the
//! supplied place is a request error, never a silent no-op.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, place::PlaceRepository, user::UserRepository},
    error::AppError,
    model::comment::{CreateCommentParams, UpdateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on a place.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(AppError::NotFound)` - The place or the author does not exist;
    ///   the two cases carry distinct messages
    pub async fn create(
        &self,
        place_id: i32,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, AppError> {
        if PlaceRepository::new(self.db)
            .find_by_id(place_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a place for the provided id.".to_string(),
            ));
        }

        if UserRepository::new(self.db)
            .find_by_id(params.creator_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }

        CommentRepository::new(self.db)
            .create(place_id, params)
            .await
            .map_err(Into::into)
    }

    /// Replaces a comment's text and post date.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated comment
    /// - `Err(AppError::NotFound)` - No comment with that id
    pub async fn update(
        &self,
        comment_id: i32,
        params: UpdateCommentParams,
    ) -> Result<entity::comment::Model, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo.find_by_id(comment_id).await?.ok_or_else(|| {
            AppError::NotFound("Could not find a comment for the provided id.".to_string())
        })?;

        repo.update(comment, params).await.map_err(Into::into)
    }

    /// Deletes a comment through its place-scoped route.
    ///
    /// The place, the comment, and the comment's author must all exist, and
    /// the comment must belong to the supplied place; a mismatched pair is
    /// rejected as a bad request rather than silently ignored.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - Place, comment, or author absent
    /// - `Err(AppError::BadRequest)` - The comment belongs to another place
    pub async fn delete(&self, place_id: i32, comment_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let place = PlaceRepository::new(self.db)
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a place for this id.".to_string()))?;

        let comment = repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a comment for this id.".to_string()))?;

        if UserRepository::new(self.db)
            .find_by_id(comment.creator_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find the owner of the comment.".to_string(),
            ));
        }

        if comment.place_id != place.id {
            return Err(AppError::BadRequest(
                "The comment does not belong to the provided place.".to_string(),
            ));
        }

        repo.delete(comment.id).await?;

        Ok(())
    }

    /// Gets every comment with its author and place for the public feed.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment, author, place)>)` - All comments, references resolved
    pub async fn feed(
        &self,
    ) -> Result<
        Vec<(
            entity::comment::Model,
            entity::user::Model,
            entity::place::Model,
        )>,
        AppError,
    > {
        let comments = CommentRepository::new(self.db).get_all_with_authors().await?;

        let place_ids: Vec<i32> = comments.iter().map(|(comment, _)| comment.place_id).collect();
        let places: std::collections::HashMap<i32, entity::place::Model> =
            PlaceRepository::new(self.db)
                .get_by_ids(&place_ids)
                .await?
                .into_iter()
                .map(|place| (place.id, place))
                .collect();

        comments
            .into_iter()
            .map(|(comment, author)| {
                let id = comment.id;
                let author = author.ok_or_else(|| {
                    AppError::InternalError(format!("Comment {} has no author row", id))
                })?;
                let place = places.get(&comment.place_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!("Comment {} has no place row", id))
                })?;
                Ok((comment, author, place))
            })
            .collect()
    }
}
