//! Place DTOs and content validation bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comment::CommentWithAuthorDto, user::UserDto};

/// Maximum length of a place title.
pub const TITLE_MAX_LEN: usize = 67;
/// Maximum length of a place description.
pub const DESCRIPTION_MAX_LEN: usize = 377;
/// Maximum length of a place address.
pub const ADDRESS_MAX_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: LocationDto,
    pub image_url: String,
    pub post_date: DateTime<Utc>,
    pub share_count: i32,
    pub creator_id: i32,
}

impl PlaceDto {
    pub fn from_entity(entity: entity::place::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            address: entity.address,
            location: LocationDto {
                lat: entity.lat,
                lng: entity.lng,
            },
            image_url: entity.image_url,
            post_date: entity.post_date,
            share_count: entity.share_count,
            creator_id: entity.creator_id,
        }
    }
}

/// A place with its creator, comments, and favoriting users expanded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceDetailDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: LocationDto,
    pub image_url: String,
    pub post_date: DateTime<Utc>,
    pub share_count: i32,
    pub creator: UserDto,
    pub comments: Vec<CommentWithAuthorDto>,
    pub favorites_user_ids: Vec<i32>,
}

/// A place with its creator expanded, as returned by the per-user listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceWithCreatorDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: LocationDto,
    pub image_url: String,
    pub post_date: DateTime<Utc>,
    pub share_count: i32,
    pub creator: UserDto,
}

impl PlaceWithCreatorDto {
    pub fn from_entities(place: entity::place::Model, creator: UserDto) -> Self {
        Self {
            id: place.id,
            title: place.title,
            description: place.description,
            address: place.address,
            location: LocationDto {
                lat: place.lat,
                lng: place.lng,
            },
            image_url: place.image_url,
            post_date: place.post_date,
            share_count: place.share_count,
            creator,
        }
    }
}

/// Feed representation of a place: address and location are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedPlaceDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub post_date: DateTime<Utc>,
    pub share_count: i32,
    pub creator: UserDto,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePlaceDto {
    pub title: String,
    pub description: String,
    pub address: String,
    pub post_date: DateTime<Utc>,
    pub creator_id: i32,
    /// Image payload forwarded to the image host.
    pub image: String,
}

/// Partial place update. Omitted fields are left unchanged; `post_date` is
/// always applied.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePlaceDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub post_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStatusDto {
    pub favorite: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShareCountDto {
    /// Delta added to the place's share counter.
    pub new_share: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareStatusDto {
    pub share_post: bool,
}
