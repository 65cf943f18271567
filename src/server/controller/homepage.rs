use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        comment::FeedCommentDto,
        place::{FeedPlaceDto, PlaceDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        service::{comment::CommentService, place::PlaceService},
        state::AppState,
    },
};

/// GET /homepage - Public feed of all places
///
/// Address and location are omitted from the feed shape; the creator is
/// expanded on every entry.
///
/// # Returns
/// - `200 OK`: JSON array of feed places
/// - `500 Internal Server Error`: Database error
pub async fn get_all_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = PlaceService::new(&state.db).feed().await?;

    let places: Vec<FeedPlaceDto> = places
        .into_iter()
        .map(|(place, creator)| FeedPlaceDto {
            id: place.id,
            title: place.title,
            description: place.description,
            image_url: place.image_url,
            post_date: place.post_date,
            share_count: place.share_count,
            creator: UserDto::from_entity(creator),
        })
        .collect();

    Ok((StatusCode::OK, Json(places)))
}

/// GET /homepage/comments - Public feed of all comments
///
/// The author and the annotated place are expanded on every entry; the post
/// date is omitted from the feed shape.
///
/// # Returns
/// - `200 OK`: JSON array of feed comments
/// - `500 Internal Server Error`: Database error
pub async fn get_all_comments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).feed().await?;

    let comments: Vec<FeedCommentDto> = comments
        .into_iter()
        .map(|(comment, author, place)| FeedCommentDto {
            id: comment.id,
            text: comment.text,
            creator: UserDto::from_entity(author),
            place: PlaceDto::from_entity(place),
        })
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}
