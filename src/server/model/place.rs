//! Place operation parameters and composites.

use chrono::{DateTime, Utc};

use crate::model::place::{CreatePlaceDto, UpdatePlaceDto};
use crate::server::service::{geocoding::Coordinates, images::StoredImage};

/// Parameters for creating a place.
///
/// Carries the raw address and image payload; the service resolves them
/// through the geocoder and the image host before persisting.
#[derive(Debug, Clone)]
pub struct CreatePlaceParams {
    pub title: String,
    pub description: String,
    pub address: String,
    pub post_date: DateTime<Utc>,
    pub creator_id: i32,
    pub image: String,
}

impl CreatePlaceParams {
    pub fn from_dto(dto: CreatePlaceDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            address: dto.address,
            post_date: dto.post_date,
            creator_id: dto.creator_id,
            image: dto.image,
        }
    }
}

/// Parameters for a partial place update.
///
/// `None` fields are left unchanged. An address change triggers re-geocoding;
/// an image change replaces the stored asset. The post date is always applied.
#[derive(Debug, Clone)]
pub struct UpdatePlaceParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub post_date: DateTime<Utc>,
}

impl UpdatePlaceParams {
    pub fn from_dto(dto: UpdatePlaceDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            address: dto.address,
            image: dto.image,
            post_date: dto.post_date,
        }
    }
}

/// Column values for inserting a place row.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    pub image: StoredImage,
    pub post_date: DateTime<Utc>,
    pub creator_id: i32,
}

/// Resolved column updates applied by the repository during a place edit.
///
/// Produced by the service after geocoding and asset replacement; every
/// `Some` field is written. `post_date` is unconditional.
#[derive(Debug, Clone)]
pub struct UpdatePlaceFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub location: Option<Coordinates>,
    pub image: Option<StoredImage>,
    pub post_date: DateTime<Utc>,
}

/// A place expanded with its creator, comments (authors resolved), and the
/// users who favorited it.
#[derive(Debug, Clone)]
pub struct PlaceDetail {
    pub place: entity::place::Model,
    pub creator: entity::user::Model,
    pub comments: Vec<(entity::comment::Model, entity::user::Model)>,
    pub favorites_user_ids: Vec<i32>,
}
