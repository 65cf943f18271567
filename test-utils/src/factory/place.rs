//! Place factory for creating test place entities.
//!
//! Creates place records owned by an existing user. The creator id is a
//! required argument because the place table carries a foreign key to the
//! user table.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test places with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::place::PlaceFactory;
///
/// let place = PlaceFactory::new(&db, user.id)
///     .title("Empire State Building")
///     .address("20 W 34th St")
///     .build()
///     .await?;
/// ```
pub struct PlaceFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    address: String,
    lat: f64,
    lng: f64,
    image_asset_id: String,
    image_url: String,
    post_date: DateTime<Utc>,
    share_count: i32,
    creator_id: i32,
}

impl<'a> PlaceFactory<'a> {
    /// Creates a new PlaceFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Place {id}"` where id is auto-incremented
    /// - description: `"Description for place {id}"`
    /// - address: `"{id} Example Street"`
    /// - lat/lng: fixed Manhattan coordinates
    /// - image: `"places/img_{id}"` asset with a matching URL
    /// - post_date: now
    /// - share_count: 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - Id of the owning user (must exist)
    ///
    /// # Returns
    /// - `PlaceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Place {}", id),
            description: format!("Description for place {}", id),
            address: format!("{} Example Street", id),
            lat: 40.7484,
            lng: -73.9857,
            image_asset_id: format!("places/img_{}", id),
            image_url: format!("https://images.example.test/places/img_{}.jpg", id),
            post_date: Utc::now(),
            share_count: 0,
            creator_id,
        }
    }

    /// Sets the title for the place.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the place.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the address for the place.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the geocoded coordinates for the place.
    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    /// Sets the image asset id for the place.
    pub fn image_asset_id(mut self, image_asset_id: impl Into<String>) -> Self {
        self.image_asset_id = image_asset_id.into();
        self
    }

    /// Sets the post date for the place.
    pub fn post_date(mut self, post_date: DateTime<Utc>) -> Self {
        self.post_date = post_date;
        self
    }

    /// Sets the share count for the place.
    pub fn share_count(mut self, share_count: i32) -> Self {
        self.share_count = share_count;
        self
    }

    /// Builds and inserts the place entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::place::Model)` - Created place entity
    /// - `Err(DbErr)` - Database error during insert (including a missing creator)
    pub async fn build(self) -> Result<entity::place::Model, DbErr> {
        entity::place::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            lat: ActiveValue::Set(self.lat),
            lng: ActiveValue::Set(self.lng),
            image_asset_id: ActiveValue::Set(self.image_asset_id),
            image_url: ActiveValue::Set(self.image_url),
            post_date: ActiveValue::Set(self.post_date),
            share_count: ActiveValue::Set(self.share_count),
            creator_id: ActiveValue::Set(self.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a place with default values owned by the given user.
///
/// Shorthand for `PlaceFactory::new(db, creator_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_id` - Id of the owning user
///
/// # Returns
/// - `Ok(entity::place::Model)` - Created place entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_place(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::place::Model, DbErr> {
    PlaceFactory::new(db, creator_id).build().await
}
