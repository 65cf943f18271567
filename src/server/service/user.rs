//! User business logic.
//!
//! Covers registration, login, profile reads and edits, the single-field
//! theme/notification patches, and the profile cascade delete. Login failures
//! for an unknown email and a wrong password are indistinguishable by design.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        comment::CommentRepository, favorite::FavoriteRepository, place::PlaceRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{
        CreateUserParams, LoginParams, SignupParams, UpdateProfileParams, UpdateUserFields,
    },
    service::{
        auth::AuthService,
        images::{ImageStoreClient, StoredImage, AVATAR_FOLDER},
    },
};
use crate::model::patch::Patch;

/// Locally generated asset id for accounts without an uploaded avatar.
///
/// The placeholder never exists on the image host; an empty avatar URL marks
/// it so edit and delete paths skip the remote deletion.
fn placeholder_avatar() -> StoredImage {
    StoredImage {
        asset_id: format!("avatars/placeholder_{}", Uuid::new_v4()),
        url: String::new(),
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users.
    pub async fn list(&self) -> Result<Vec<entity::user::Model>, AppError> {
        UserRepository::new(self.db).get_all().await.map_err(Into::into)
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Could not find a user for the provided id.".to_string())
            })
    }

    /// Registers a new account and issues its first token.
    ///
    /// The avatar upload is skipped entirely when no image is supplied; the
    /// account then carries a locally generated placeholder asset id and an
    /// empty URL.
    ///
    /// # Returns
    /// - `Ok((Model, String))` - The created user and a signed token
    /// - `Err(AppError::Validation)` - Email already registered (422)
    /// - `Err(AppError::UpstreamErr)` - Avatar upload rejected (400)
    pub async fn signup(
        &self,
        auth: &AuthService<'_>,
        images: &ImageStoreClient,
        params: SignupParams,
    ) -> Result<(entity::user::Model, String), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Validation(
                "User already exists, please login instead.".to_string(),
            ));
        }

        let avatar = match params.image.as_deref() {
            Some(image) => images.upload(AVATAR_FOLDER, image).await?,
            None => placeholder_avatar(),
        };

        let password_hash = auth.hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                avatar_asset_id: avatar.asset_id,
                avatar_url: avatar.url,
                theme_preference: params.theme_preference,
                notification_viewed: params.notification_viewed,
            })
            .await?;

        let token = auth.issue_token(user.id, &user.email)?;

        tracing::info!(user_id = user.id, "registered new user");

        Ok((user, token))
    }

    /// Authenticates by email and password and issues a token.
    ///
    /// # Returns
    /// - `Ok((Model, String))` - The user and a signed token
    /// - `Err(AppError::AuthErr)` - Unknown email or wrong password; both
    ///   yield the identical 401 so the response carries no enumeration signal
    pub async fn login(
        &self,
        auth: &AuthService<'_>,
        params: LoginParams,
    ) -> Result<(entity::user::Model, String), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !auth.verify_password(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = auth.issue_token(user.id, &user.email)?;

        Ok((user, token))
    }

    /// Gets the places owned by a user.
    ///
    /// A user with no places yields an empty list; only a missing user is a
    /// not-found error.
    ///
    /// # Returns
    /// - `Ok((Model, Vec<Model>))` - The user and their owned places
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_places(
        &self,
        user_id: i32,
    ) -> Result<(entity::user::Model, Vec<entity::place::Model>), AppError> {
        let user = self.get_by_id(user_id).await?;

        let places = PlaceRepository::new(self.db).get_by_creator(user_id).await?;

        Ok((user, places))
    }

    /// Gets the places a user has favorited, creators expanded.
    ///
    /// A user with no favorites yields an empty list; only a missing user is
    /// a not-found error.
    ///
    /// # Returns
    /// - `Ok(Vec<(place, creator)>)` - Favorited places with their creators
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_favorites(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::place::Model, entity::user::Model)>, AppError> {
        self.get_by_id(user_id).await?;

        let place_ids = FavoriteRepository::new(self.db)
            .place_ids_for_user(user_id)
            .await?;

        PlaceRepository::new(self.db)
            .get_by_ids_with_creator(&place_ids)
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

    /// Applies a partial profile update.
    ///
    /// A password change verifies the supplied current password against the
    /// stored hash before the new hash is accepted. The avatar patch supports
    /// keep, replace-with-new (prior asset deleted), and explicit-remove
    /// (placeholder id, empty URL, prior asset deleted).
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::AuthErr)` - Current password mismatch (401)
    pub async fn update_profile(
        &self,
        auth: &AuthService<'_>,
        images: &ImageStoreClient,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::NotFound("Could not find a user for the provided id.".to_string())
        })?;

        let password_hash = match params.password {
            Some(change) => {
                if !auth.verify_password(&change.current, &user.password_hash)? {
                    return Err(AuthError::WrongPassword.into());
                }
                Some(auth.hash_password(&change.new)?)
            }
            None => None,
        };

        let avatar = match params.avatar {
            Patch::Keep => None,
            Patch::Remove => {
                if !user.avatar_url.is_empty() {
                    images.delete(&user.avatar_asset_id).await?;
                }
                Some(placeholder_avatar())
            }
            Patch::Set(image) => {
                if !user.avatar_url.is_empty() {
                    images.delete(&user.avatar_asset_id).await?;
                }
                Some(images.upload(AVATAR_FOLDER, &image).await?)
            }
        };

        repo.update_profile(
            user,
            UpdateUserFields {
                name: params.name,
                email: params.email,
                password_hash,
                avatar,
            },
        )
        .await
        .map_err(Into::into)
    }

    /// Sets a user's theme preference.
    ///
    /// # Returns
    /// - `Ok(())` - Theme updated
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_theme(&self, user_id: i32, theme: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).set_theme(user_id, theme).await? {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets a user's notification-viewed flag.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_notification_viewed(&self, user_id: i32, viewed: bool) -> Result<(), AppError> {
        if !UserRepository::new(self.db)
            .set_notification_viewed(user_id, viewed)
            .await?
        {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }
        Ok(())
    }

    /// Marks notifications viewed for every user not yet marked.
    ///
    /// Idempotent; users already marked are untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users flipped
    pub async fn mark_all_notifications_viewed(&self) -> Result<u64, AppError> {
        UserRepository::new(self.db)
            .mark_all_notifications_viewed()
            .await
            .map_err(Into::into)
    }

    /// Deletes a profile and everything it owns.
    ///
    /// Phases, in order:
    /// 1. Reference detachment - favorite markers on the user's places and
    ///    markers placed by the user are removed.
    /// 2. Bulk row deletes - comments authored by the user or attached to an
    ///    owned place, then the owned places, then the user row.
    /// 3. Asset cleanup - the avatar and every deleted place's image.
    ///
    /// A failing phase stops the cascade and propagates; earlier phases are
    /// not rolled back.
    ///
    /// # Returns
    /// - `Ok(())` - Profile and owned content removed
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_profile(
        &self,
        images: &ImageStoreClient,
        user_id: i32,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let place_repo = PlaceRepository::new(self.db);

        let user = user_repo.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::NotFound("Could not find a user for the provided id.".to_string())
        })?;

        let owned_places = place_repo.get_by_creator(user_id).await?;
        let owned_place_ids: Vec<i32> = owned_places.iter().map(|place| place.id).collect();

        // Phase 1: reference detachment.
        let favorites = FavoriteRepository::new(self.db);
        favorites.delete_by_places(&owned_place_ids).await?;
        favorites.delete_by_user(user_id).await?;

        // Phase 2: bulk row deletes, children before parents.
        let comments_removed = CommentRepository::new(self.db)
            .delete_by_creator_or_places(user_id, &owned_place_ids)
            .await?;
        place_repo.delete_many(&owned_place_ids).await?;
        user_repo.delete(user_id).await?;

        // Phase 3: asset cleanup.
        if !user.avatar_url.is_empty() {
            images.delete(&user.avatar_asset_id).await?;
        }
        for place in &owned_places {
            if !place.image_asset_id.is_empty() {
                images.delete(&place.image_asset_id).await?;
            }
        }

        tracing::info!(
            user_id,
            places_removed = owned_places.len(),
            comments_removed,
            "deleted profile and owned content"
        );

        Ok(())
    }
}
