use crate::server::{
    data::place::PlaceRepository,
    model::place::{NewPlace, UpdatePlaceFields},
    service::{geocoding::Coordinates, images::StoredImage},
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod queries;

fn sample_new_place(creator_id: i32) -> NewPlace {
    NewPlace {
        title: "Empire State Building".to_string(),
        description: "A very tall building.".to_string(),
        address: "20 W 34th St, New York".to_string(),
        location: Coordinates {
            lat: 40.7484,
            lng: -73.9857,
        },
        image: StoredImage {
            asset_id: "places/esb".to_string(),
            url: "https://images.example.test/places/esb.jpg".to_string(),
        },
        post_date: Utc::now(),
        creator_id,
    }
}
