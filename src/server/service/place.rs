//! Place business logic.
//!
//! Orchestrates place reads and writes across the repositories and the
//! external clients. Creation resolves the address and uploads the image
//! before anything is persisted, so a collaborator failure never leaves an
//! orphan row. Deletion is the multi-phase cascade: favorites, then comments,
//! then the image asset, then the place row itself; a failing phase stops the
//! procedure and surfaces as an error without touching later phases.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comment::CommentRepository, favorite::FavoriteRepository, place::PlaceRepository,
        user::UserRepository,
    },
    error::AppError,
    model::place::{
        CreatePlaceParams, NewPlace, PlaceDetail, UpdatePlaceFields, UpdatePlaceParams,
    },
    service::{
        geocoding::GeocodingClient,
        images::{ImageStoreClient, PLACE_IMAGE_FOLDER},
    },
};

pub struct PlaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a place with its creator, comments, and favoriting users expanded.
    ///
    /// # Returns
    /// - `Ok(PlaceDetail)` - The expanded place
    /// - `Err(AppError::NotFound)` - No place with that id
    pub async fn get_detail(&self, place_id: i32) -> Result<PlaceDetail, AppError> {
        let (place, creator) = PlaceRepository::new(self.db)
            .find_by_id_with_creator(place_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Could not find a place for the provided id.".to_string())
            })?;

        let creator = creator.ok_or_else(|| {
            AppError::InternalError(format!("Place {} has no creator row", place.id))
        })?;

        let comments = CommentRepository::new(self.db)
            .get_by_place_with_authors(place.id)
            .await?
            .into_iter()
            .map(|(comment, author)| {
                let id = comment.id;
                author
                    .map(|author| (comment, author))
                    .ok_or_else(|| AppError::InternalError(format!("Comment {} has no author row", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let favorites_user_ids = FavoriteRepository::new(self.db)
            .user_ids_for_place(place.id)
            .await?;

        Ok(PlaceDetail {
            place,
            creator,
            comments,
            favorites_user_ids,
        })
    }

    /// Gets every place with its creator for the public feed.
    ///
    /// # Returns
    /// - `Ok(Vec<(place, creator)>)` - All places, creators resolved
    pub async fn feed(
        &self,
    ) -> Result<Vec<(entity::place::Model, entity::user::Model)>, AppError> {
        PlaceRepository::new(self.db)
            .get_all_with_creator()
            .await?
            .into_iter()
            .map(|(place, creator)| {
                let id = place.id;
                creator
                    .map(|creator| (place, creator))
                    .ok_or_else(|| AppError::InternalError(format!("Place {} has no creator row", id)))
            })
            .collect()
    }

    /// Creates a place.
    ///
    /// Side effect ordering: the address is geocoded and the image uploaded
    /// before the creator check and the insert, so a failed upload never
    /// produces an orphan place record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created place with zero share count
    /// - `Err(AppError::UpstreamErr)` - Geocoding produced no result (422) or
    ///   the image upload was rejected (400)
    /// - `Err(AppError::NotFound)` - The referenced creator does not exist
    pub async fn create(
        &self,
        geocoder: &GeocodingClient,
        images: &ImageStoreClient,
        params: CreatePlaceParams,
    ) -> Result<entity::place::Model, AppError> {
        let location = geocoder.resolve(&params.address).await?;
        let image = images.upload(PLACE_IMAGE_FOLDER, &params.image).await?;

        if UserRepository::new(self.db)
            .find_by_id(params.creator_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }

        let place = PlaceRepository::new(self.db)
            .create(NewPlace {
                title: params.title,
                description: params.description,
                address: params.address,
                location,
                image,
                post_date: params.post_date,
                creator_id: params.creator_id,
            })
            .await?;

        tracing::info!(place_id = place.id, creator_id = place.creator_id, "created place");

        Ok(place)
    }

    /// Toggles the favorite marker between a user and a place.
    ///
    /// Removes the marker if present, inserts it otherwise; calling twice
    /// restores the original state. The membership is a read-modify-write and
    /// is not serialized against concurrent toggles.
    ///
    /// # Returns
    /// - `Ok(bool)` - Membership state after the toggle
    /// - `Err(AppError::NotFound)` - Place or user absent
    pub async fn toggle_favorite(&self, place_id: i32, user_id: i32) -> Result<bool, AppError> {
        if PlaceRepository::new(self.db)
            .find_by_id(place_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Could not find this place.".to_string()));
        }
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }

        let favorites = FavoriteRepository::new(self.db);

        if favorites.exists(place_id, user_id).await? {
            favorites.remove(place_id, user_id).await?;
            Ok(false)
        } else {
            favorites.insert(place_id, user_id).await?;
            Ok(true)
        }
    }

    /// Adds a delta to the place's share counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter updated
    /// - `Err(AppError::NotFound)` - No place with that id
    pub async fn add_share_count(&self, place_id: i32, delta: i32) -> Result<bool, AppError> {
        let repo = PlaceRepository::new(self.db);

        let place = repo
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find this place.".to_string()))?;

        let share_count = place.share_count + delta;
        repo.set_share_count(place, share_count).await?;

        Ok(true)
    }

    /// Applies a partial update to a place.
    ///
    /// An address change triggers re-geocoding; an image change deletes the
    /// prior asset and uploads the new one. The post date is refreshed on
    /// every edit regardless of which fields changed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated place
    /// - `Err(AppError::NotFound)` - No place with that id
    /// - `Err(AppError::UpstreamErr)` - Re-geocoding or re-upload failed
    pub async fn update(
        &self,
        geocoder: &GeocodingClient,
        images: &ImageStoreClient,
        place_id: i32,
        params: UpdatePlaceParams,
    ) -> Result<entity::place::Model, AppError> {
        let repo = PlaceRepository::new(self.db);

        let place = repo.find_by_id(place_id).await?.ok_or_else(|| {
            AppError::NotFound("Could not find a place for the provided id.".to_string())
        })?;

        let location = match params.address.as_deref() {
            Some(address) => Some(geocoder.resolve(address).await?),
            None => None,
        };

        let image = match params.image.as_deref() {
            Some(data) => {
                if !place.image_asset_id.is_empty() {
                    images.delete(&place.image_asset_id).await?;
                }
                Some(images.upload(PLACE_IMAGE_FOLDER, data).await?)
            }
            None => None,
        };

        repo.update(
            place,
            UpdatePlaceFields {
                title: params.title,
                description: params.description,
                address: params.address,
                location,
                image,
                post_date: params.post_date,
            },
        )
        .await
        .map_err(Into::into)
    }

    /// Deletes a place and everything referencing it.
    ///
    /// Phases, in order: scrub favorite markers, delete the place's comments,
    /// delete the image asset, delete the place row. Each phase only runs if
    /// the previous one succeeded; a fault stops the cascade and propagates
    /// (no rollback is attempted).
    ///
    /// # Returns
    /// - `Ok(())` - Place and all references removed
    /// - `Err(AppError::NotFound)` - No place with that id
    pub async fn delete(&self, images: &ImageStoreClient, place_id: i32) -> Result<(), AppError> {
        let repo = PlaceRepository::new(self.db);

        let place = repo
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find a place for this id.".to_string()))?;

        let favorites_removed = FavoriteRepository::new(self.db)
            .delete_by_place(place_id)
            .await?;

        let comments_removed = CommentRepository::new(self.db)
            .delete_by_place(place_id)
            .await?;

        if !place.image_asset_id.is_empty() {
            images.delete(&place.image_asset_id).await?;
        }

        repo.delete(place_id).await?;

        tracing::info!(
            place_id,
            favorites_removed,
            comments_removed,
            "deleted place and detached references"
        );

        Ok(())
    }
}
