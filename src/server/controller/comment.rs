use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto, TEXT_MAX_LEN},
    },
    server::{
        error::AppError,
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
        util::validate,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// POST /api/places/{pid}/newcomment - Create a comment on a place
///
/// The place and the author must both exist; each missing reference surfaces
/// as its own not-found error.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `201 Created`: The created comment
/// - `404 Not Found`: Place or author absent
/// - `422 Unprocessable Entity`: Empty or overlong text
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/api/places/{pid}/newcomment",
    tag = COMMENT_TAG,
    params(
        ("pid" = i32, Path, description = "Place id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Place or author not found", body = ErrorDto),
        (status = 422, description = "Invalid comment text", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(place_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::require_non_empty("comment", &payload.text)?;
    validate::require_max_len("comment", &payload.text, TEXT_MAX_LEN)?;

    let params = CreateCommentParams::from_dto(payload);

    let comment = CommentService::new(&state.db).create(place_id, params).await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from_entity(comment))))
}

/// PATCH /api/places/{pid}/editcomment/{cid} - Edit a comment
///
/// Replaces the text and post date unconditionally.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: The updated comment
/// - `404 Not Found`: No comment with that id
/// - `422 Unprocessable Entity`: Empty or overlong text
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    patch,
    path = "/api/places/{pid}/editcomment/{cid}",
    tag = COMMENT_TAG,
    params(
        ("pid" = i32, Path, description = "Place id"),
        ("cid" = i32, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 422, description = "Invalid comment text", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path((_place_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::require_non_empty("comment", &payload.text)?;
    validate::require_max_len("comment", &payload.text, TEXT_MAX_LEN)?;

    let params = UpdateCommentParams::from_dto(payload);

    let comment = CommentService::new(&state.db).update(comment_id, params).await?;

    Ok((StatusCode::OK, Json(CommentDto::from_entity(comment))))
}

/// DELETE /api/places/{pid}/deletecomment/{cid} - Delete a comment
///
/// The comment must belong to the place named in the route; a mismatched
/// pair is rejected as a bad request.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Comment deleted
/// - `400 Bad Request`: The comment belongs to another place
/// - `404 Not Found`: Place, comment, or author absent
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/api/places/{pid}/deletecomment/{cid}",
    tag = COMMENT_TAG,
    params(
        ("pid" = i32, Path, description = "Place id"),
        ("cid" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 400, description = "Comment does not belong to the place", body = ErrorDto),
        (status = 403, description = "Authentication failed", body = ErrorDto),
        (status = 404, description = "Place, comment, or author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((place_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db).delete(place_id, comment_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "The comment was deleted.".to_string(),
        }),
    ))
}
