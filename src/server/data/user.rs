//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, profile updates, single-field patches, and the bulk
//! notification sweep, returning entity models at the repository boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserFields};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The unique index on the email column rejects duplicate registrations at
    /// the data layer; callers check for an existing account first to surface a
    /// friendlier error.
    ///
    /// # Arguments
    /// - `params` - Column values for the new account
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including duplicate email)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            avatar_asset_id: ActiveValue::Set(params.avatar_asset_id),
            avatar_url: ActiveValue::Set(params.avatar_url),
            theme_preference: ActiveValue::Set(params.theme_preference),
            notification_viewed: ActiveValue::Set(params.notification_viewed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email address.
    ///
    /// Used by signup (duplicate check) and login (credential lookup).
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user registered under that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets all users ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies a resolved profile update to an already-fetched user.
    ///
    /// Only `Some` fields are written; everything else stays untouched. The
    /// caller has already verified the current password and handled avatar
    /// asset replacement.
    ///
    /// # Arguments
    /// - `user` - The user row as currently stored
    /// - `fields` - Columns to replace
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        fields: UpdateUserFields,
    ) -> Result<entity::user::Model, DbErr> {
        // An update with no changed columns is not a valid statement
        if fields.name.is_none()
            && fields.email.is_none()
            && fields.password_hash.is_none()
            && fields.avatar.is_none()
        {
            return Ok(user);
        }

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(name) = fields.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = fields.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = fields.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(avatar) = fields.avatar {
            active.avatar_asset_id = ActiveValue::Set(avatar.asset_id);
            active.avatar_url = ActiveValue::Set(avatar.url);
        }

        active.update(self.db).await
    }

    /// Sets the theme preference for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to patch
    /// - `theme` - New theme preference
    ///
    /// # Returns
    /// - `Ok(true)` - Theme updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_theme(&self, user_id: i32, theme: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::ThemePreference,
                sea_orm::sea_query::Expr::value(theme),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the notification-viewed flag for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to patch
    /// - `viewed` - New flag value
    ///
    /// # Returns
    /// - `Ok(true)` - Flag updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_notification_viewed(&self, user_id: i32, viewed: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::NotificationViewed,
                sea_orm::sea_query::Expr::value(viewed),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks notifications viewed for every user that has not seen them yet.
    ///
    /// Users already marked are skipped, making the sweep idempotent.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users flipped to viewed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_notifications_viewed(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::NotificationViewed.eq(false))
            .col_expr(
                entity::user::Column::NotificationViewed,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a user row.
    ///
    /// Foreign keys restrict deletion while owned places or authored comments
    /// still exist; the profile cascade removes those first.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted (or no matching row)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
