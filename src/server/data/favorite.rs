//! Favorite relation repository.
//!
//! Provides the `FavoriteRepository` over the place/user favorite relation.
//! The relation is tracked from both sides: toggles insert or remove a single
//! row, and the cascade deletes scrub every row pointing at a removed place
//! or user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the user currently favorites the place.
    ///
    /// # Returns
    /// - `Ok(bool)` - Membership state of the (place, user) pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, place_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::PlaceFavorite::find_by_id((place_id, user_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Inserts a favorite marker for the (place, user) pair.
    ///
    /// # Returns
    /// - `Ok(())` - Marker created
    /// - `Err(DbErr)` - Database error during insert (including duplicates)
    pub async fn insert(&self, place_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::place_favorite::ActiveModel {
            place_id: ActiveValue::Set(place_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Removes the favorite marker for the (place, user) pair.
    ///
    /// # Returns
    /// - `Ok(())` - Marker removed (or no matching row)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, place_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::PlaceFavorite::delete_by_id((place_id, user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Ids of every user who favorited the place.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Favoriting user ids (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn user_ids_for_place(&self, place_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PlaceFavorite::find()
            .filter(entity::place_favorite::Column::PlaceId.eq(place_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Ids of every place the user favorited.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Favorited place ids (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn place_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PlaceFavorite::find()
            .filter(entity::place_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.place_id).collect())
    }

    /// Deletes every favorite marker on the given place.
    ///
    /// First phase of the place cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of markers removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_place(&self, place_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlaceFavorite::delete_many()
            .filter(entity::place_favorite::Column::PlaceId.eq(place_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every favorite marker placed by the given user.
    ///
    /// Part of the detachment phase of the profile cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of markers removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlaceFavorite::delete_many()
            .filter(entity::place_favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every favorite marker on any of the given places.
    ///
    /// Part of the detachment phase of the profile cascade. Returns early if
    /// the id list is empty.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of markers removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_places(&self, place_ids: &[i32]) -> Result<u64, DbErr> {
        if place_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PlaceFavorite::delete_many()
            .filter(entity::place_favorite::Column::PlaceId.is_in(place_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
