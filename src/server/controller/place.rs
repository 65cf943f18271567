use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::CommentWithAuthorDto,
        place::{
            CreatePlaceDto, FavoriteDto, FavoriteStatusDto, LocationDto, PlaceDetailDto, PlaceDto,
            ShareCountDto, ShareStatusDto, UpdatePlaceDto, ADDRESS_MAX_LEN, DESCRIPTION_MAX_LEN,
            TITLE_MAX_LEN,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        model::place::{CreatePlaceParams, PlaceDetail, UpdatePlaceParams},
        service::place::PlaceService,
        state::AppState,
        util::validate,
    },
};

/// Tag for grouping place endpoints in OpenAPI documentation
pub static PLACE_TAG: &str = "place";

fn detail_dto(detail: PlaceDetail) -> PlaceDetailDto {
    PlaceDetailDto {
        id: detail.place.id,
        title: detail.place.title,
        description: detail.place.description,
        address: detail.place.address,
        location: LocationDto {
            lat: detail.place.lat,
            lng: detail.place.lng,
        },
        image_url: detail.place.image_url,
        post_date: detail.place.post_date,
        share_count: detail.place.share_count,
        creator: UserDto::from_entity(detail.creator),
        comments: detail
            .comments
            .into_iter()
            .map(|(comment, author)| CommentWithAuthorDto {
                id: comment.id,
                text: comment.text,
                post_date: comment.post_date,
                place_id: comment.place_id,
                creator: UserDto::from_entity(author),
            })
            .collect(),
        favorites_user_ids: detail.favorites_user_ids,
    }
}

/// GET /api/places/{pid} - Get a place by id
///
/// Returns the place with its creator, comments (authors expanded), and the
/// ids of every user who favorited it.
///
/// # Returns
/// - `200 OK`: The expanded place
/// - `404 Not Found`: No place with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/places/{pid}",
    tag = PLACE_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved place", body = PlaceDetailDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_place_by_id(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = PlaceService::new(&state.db).get_detail(place_id).await?;

    Ok((StatusCode::OK, Json(detail_dto(detail))))
}

/// POST /api/places/newplace - Create a new place
///
/// Geocodes the address and uploads the image before anything is persisted.
/// A geocoding miss and an image rejection surface as distinct client errors.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `201 Created`: The created place with zero share count
/// - `404 Not Found`: The referenced creator does not exist
/// - `422 Unprocessable Entity`: Validation failure or unresolvable address
/// - `400 Bad Request`: Image upload rejected
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/api/places/newplace",
    tag = PLACE_TAG,
    request_body = CreatePlaceDto,
    responses(
        (status = 201, description = "Successfully created place", body = PlaceDto),
        (status = 400, description = "Image upload rejected", body = ErrorDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 422, description = "Invalid input or unresolvable address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_place(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::require_non_empty("title", &payload.title)?;
    validate::require_max_len("title", &payload.title, TITLE_MAX_LEN)?;
    validate::require_non_empty("description", &payload.description)?;
    validate::require_max_len("description", &payload.description, DESCRIPTION_MAX_LEN)?;
    validate::require_non_empty("address", &payload.address)?;
    validate::require_max_len("address", &payload.address, ADDRESS_MAX_LEN)?;
    validate::require_non_empty("image", &payload.image)?;

    let params = CreatePlaceParams::from_dto(payload);

    let place = PlaceService::new(&state.db)
        .create(&state.geocoder, &state.images, params)
        .await?;

    Ok((StatusCode::CREATED, Json(PlaceDto::from_entity(place))))
}

/// PATCH /api/places/favoriteplace/{pid} - Toggle a favorite marker
///
/// Adds the marker when absent and removes it when present; the response
/// reports the membership state after the toggle.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Current favorite state
/// - `404 Not Found`: Place or user absent
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    patch,
    path = "/api/places/favoriteplace/{pid}",
    tag = PLACE_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    request_body = FavoriteDto,
    responses(
        (status = 200, description = "Favorite toggled", body = FavoriteStatusDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Place or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_favorites(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
    Json(payload): Json<FavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = PlaceService::new(&state.db)
        .toggle_favorite(place_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteStatusDto { favorite })))
}

/// PATCH /api/places/shareplace/{pid} - Add a delta to the share counter
///
/// # Returns
/// - `200 OK`: Share counter updated
/// - `404 Not Found`: No place with that id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    patch,
    path = "/api/places/shareplace/{pid}",
    tag = PLACE_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    request_body = ShareCountDto,
    responses(
        (status = 200, description = "Share count updated", body = ShareStatusDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_share_count(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
    Json(payload): Json<ShareCountDto>,
) -> Result<impl IntoResponse, AppError> {
    let share_post = PlaceService::new(&state.db)
        .add_share_count(place_id, payload.new_share)
        .await?;

    Ok((StatusCode::OK, Json(ShareStatusDto { share_post })))
}

/// PATCH /api/places/editplace/{pid} - Partially update a place
///
/// Omitted fields are left unchanged. An address change triggers
/// re-geocoding; an image change replaces the stored asset. The post date is
/// refreshed on every edit.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: The updated place
/// - `404 Not Found`: No place with that id
/// - `422 Unprocessable Entity`: Validation failure or unresolvable address
/// - `400 Bad Request`: Image upload rejected
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    patch,
    path = "/api/places/editplace/{pid}",
    tag = PLACE_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    request_body = UpdatePlaceDto,
    responses(
        (status = 200, description = "Successfully updated place", body = PlaceDto),
        (status = 400, description = "Image upload rejected", body = ErrorDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 422, description = "Invalid input or unresolvable address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_place(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
    Json(payload): Json<UpdatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(title) = payload.title.as_deref() {
        validate::require_non_empty("title", title)?;
        validate::require_max_len("title", title, TITLE_MAX_LEN)?;
    }
    if let Some(description) = payload.description.as_deref() {
        validate::require_non_empty("description", description)?;
        validate::require_max_len("description", description, DESCRIPTION_MAX_LEN)?;
    }
    if let Some(address) = payload.address.as_deref() {
        validate::require_non_empty("address", address)?;
        validate::require_max_len("address", address, ADDRESS_MAX_LEN)?;
    }
    if let Some(image) = payload.image.as_deref() {
        validate::require_non_empty("image", image)?;
    }

    let params = UpdatePlaceParams::from_dto(payload);

    let place = PlaceService::new(&state.db)
        .update(&state.geocoder, &state.images, place_id, params)
        .await?;

    Ok((StatusCode::OK, Json(PlaceDto::from_entity(place))))
}

/// DELETE /api/places/deleteplace/{pid} - Delete a place
///
/// Runs the cascade: favorite markers, comments, the image asset, then the
/// place row. A failing phase stops the cascade with a 500.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Place and references removed
/// - `404 Not Found`: No place with that id
/// - `500 Internal Server Error`: Database or asset-deletion error
#[utoipa::path(
    delete,
    path = "/api/places/deleteplace/{pid}",
    tag = PLACE_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    responses(
        (status = 200, description = "Place deleted", body = MessageDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_place(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PlaceService::new(&state.db)
        .delete(&state.images, place_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "The place was deleted.".to_string(),
        }),
    ))
}
