//! Place data repository for database operations.
//!
//! Provides the `PlaceRepository` for managing place records: creation with
//! resolved coordinates and image assets, lookups with the creator expanded,
//! partial updates, and the bulk deletes used by the profile cascade.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::place::{NewPlace, UpdatePlaceFields};

pub struct PlaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new place row with a zero share count.
    ///
    /// # Arguments
    /// - `place` - Column values with coordinates and image already resolved
    ///
    /// # Returns
    /// - `Ok(Model)` - The created place
    /// - `Err(DbErr)` - Database error during insert (including a missing creator)
    pub async fn create(&self, place: NewPlace) -> Result<entity::place::Model, DbErr> {
        entity::place::ActiveModel {
            title: ActiveValue::Set(place.title),
            description: ActiveValue::Set(place.description),
            address: ActiveValue::Set(place.address),
            lat: ActiveValue::Set(place.location.lat),
            lng: ActiveValue::Set(place.location.lng),
            image_asset_id: ActiveValue::Set(place.image.asset_id),
            image_url: ActiveValue::Set(place.image.url),
            post_date: ActiveValue::Set(place.post_date),
            share_count: ActiveValue::Set(0),
            creator_id: ActiveValue::Set(place.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a place by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Place found
    /// - `Ok(None)` - No place with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, place_id: i32) -> Result<Option<entity::place::Model>, DbErr> {
        entity::prelude::Place::find_by_id(place_id)
            .one(self.db)
            .await
    }

    /// Finds a place by id with its creator expanded.
    ///
    /// # Returns
    /// - `Ok(Some((place, creator)))` - Place found; the creator is `None` only
    ///   if the row is orphaned, which the foreign key rules out
    /// - `Ok(None)` - No place with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_with_creator(
        &self,
        place_id: i32,
    ) -> Result<Option<(entity::place::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Place::find_by_id(place_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Gets all places with their creators expanded, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<(place, creator)>)` - All places (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_creator(
        &self,
    ) -> Result<Vec<(entity::place::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Place::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::place::Column::PostDate)
            .all(self.db)
            .await
    }

    /// Gets every place owned by the given user.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Owned places (empty if the user owns none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_creator(&self, user_id: i32) -> Result<Vec<entity::place::Model>, DbErr> {
        entity::prelude::Place::find()
            .filter(entity::place::Column::CreatorId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets the places with the given ids.
    ///
    /// Used by the comment feed to resolve parent places. Returns early if
    /// the id list is empty.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching places
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids(&self, place_ids: &[i32]) -> Result<Vec<entity::place::Model>, DbErr> {
        if place_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Place::find()
            .filter(entity::place::Column::Id.is_in(place_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets the places with the given ids, creators expanded.
    ///
    /// Used to expand a user's favorites list. Returns early if the id list
    /// is empty.
    ///
    /// # Returns
    /// - `Ok(Vec<(place, creator)>)` - Matching places
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids_with_creator(
        &self,
        place_ids: &[i32],
    ) -> Result<Vec<(entity::place::Model, Option<entity::user::Model>)>, DbErr> {
        if place_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Place::find()
            .filter(entity::place::Column::Id.is_in(place_ids.to_vec()))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Applies a resolved partial update to an already-fetched place.
    ///
    /// Only `Some` fields are written. The post date is replaced
    /// unconditionally; every edit refreshes it.
    ///
    /// # Arguments
    /// - `place` - The place row as currently stored
    /// - `fields` - Columns to replace, coordinates and image already resolved
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated place
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        place: entity::place::Model,
        fields: UpdatePlaceFields,
    ) -> Result<entity::place::Model, DbErr> {
        let mut active: entity::place::ActiveModel = place.into();

        if let Some(title) = fields.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = fields.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(address) = fields.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(location) = fields.location {
            active.lat = ActiveValue::Set(location.lat);
            active.lng = ActiveValue::Set(location.lng);
        }
        if let Some(image) = fields.image {
            active.image_asset_id = ActiveValue::Set(image.asset_id);
            active.image_url = ActiveValue::Set(image.url);
        }
        active.post_date = ActiveValue::Set(fields.post_date);

        active.update(self.db).await
    }

    /// Replaces the share counter of an already-fetched place.
    ///
    /// The caller computes the new value from the fetched row; this is a plain
    /// read-modify-write without serialization against concurrent shares.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated place
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_share_count(
        &self,
        place: entity::place::Model,
        share_count: i32,
    ) -> Result<entity::place::Model, DbErr> {
        let mut active: entity::place::ActiveModel = place.into();
        active.share_count = ActiveValue::Set(share_count);

        active.update(self.db).await
    }

    /// Deletes a place row.
    ///
    /// Foreign keys restrict deletion while comments or favorite rows still
    /// reference the place; the cascade removes those first.
    ///
    /// # Returns
    /// - `Ok(())` - Place deleted (or no matching row)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, place_id: i32) -> Result<(), DbErr> {
        entity::prelude::Place::delete_by_id(place_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every place in the given id list.
    ///
    /// Used by the profile cascade after comments and favorites are gone.
    /// Returns early if the list is empty.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of places deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, place_ids: &[i32]) -> Result<u64, DbErr> {
        if place_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Place::delete_many()
            .filter(entity::place::Column::Id.is_in(place_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
