use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::MessageDto,
        place::{PlaceDto, PlaceWithCreatorDto},
        user::{
            AuthResponseDto, LoginDto, SignupDto, UpdateNotificationDto, UpdateProfileDto,
            UpdateThemeDto, UserDto, NAME_MIN_LEN, PASSWORD_MIN_LEN,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthenticatedUser,
        model::user::{LoginParams, SignupParams, UpdateProfileParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::validate,
    },
};

/// GET /api/users - List all users
///
/// Password hashes never appear in the response.
///
/// # Returns
/// - `200 OK`: JSON array of users
/// - `500 Internal Server Error`: Database error
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).list().await?;

    let users: Vec<UserDto> = users.into_iter().map(UserDto::from_entity).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /api/users/profile/{uid} - Get a user by id
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: The user
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// POST /api/users/register - Register a new account
///
/// Validates the profile fields, rejects an already-registered email, hashes
/// the password, optionally uploads the avatar, and issues the first token.
/// The password confirmation is checked here and never persisted.
///
/// # Returns
/// - `201 Created`: The user, id, email, and a signed token
/// - `422 Unprocessable Entity`: Validation failure or email already registered
/// - `400 Bad Request`: Avatar upload rejected
/// - `500 Internal Server Error`: Database error
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::require_min_len("name", &payload.name, NAME_MIN_LEN)?;
    validate::require_email("email", &payload.email)?;
    validate::require_min_len("password", &payload.password, PASSWORD_MIN_LEN)?;
    validate::require_non_empty("theme", &payload.theme)?;
    if payload.password != payload.confirm_password {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }

    let auth = AuthService::new(&state.jwt_secret);
    let params = SignupParams::from_dto(payload);

    let (user, token) = UserService::new(&state.db)
        .signup(&auth, &state.images, params)
        .await?;

    let user_id = user.id;
    let email = user.email.clone();

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: UserDto::from_entity(user),
            user_id,
            email,
            token,
        }),
    ))
}

/// POST /api/users/login - Authenticate and issue a token
///
/// An unknown email and a wrong password yield the identical response.
///
/// # Returns
/// - `200 OK`: The user, id, email, and a signed token
/// - `401 Unauthorized`: Invalid credentials
/// - `500 Internal Server Error`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthService::new(&state.jwt_secret);
    let params = LoginParams::from_dto(payload);

    let (user, token) = UserService::new(&state.db).login(&auth, params).await?;

    let user_id = user.id;
    let email = user.email.clone();

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: UserDto::from_entity(user),
            user_id,
            email,
            token,
        }),
    ))
}

/// PATCH /api/users/profile/editprofile/{uid} - Partially update a profile
///
/// Omitted fields are left unchanged. A password change verifies the current
/// password first; the avatar supports keep, replace, and explicit-remove.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: The updated user
/// - `401 Unauthorized`: Current password mismatch
/// - `404 Not Found`: No user with that id
/// - `422 Unprocessable Entity`: Validation failure
/// - `500 Internal Server Error`: Database error
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = payload.name.as_deref() {
        validate::require_min_len("name", name, NAME_MIN_LEN)?;
    }
    if let Some(email) = payload.email.as_deref() {
        validate::require_email("email", email)?;
    }
    if let Some(change) = payload.password.as_ref() {
        validate::require_min_len("password", &change.new, PASSWORD_MIN_LEN)?;
    }

    let auth = AuthService::new(&state.jwt_secret);
    let params = UpdateProfileParams::from_dto(payload);

    let user = UserService::new(&state.db)
        .update_profile(&auth, &state.images, user_id, params)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// DELETE /api/users/profile/deleteprofile/{uid} - Delete a profile
///
/// Runs the profile cascade: reference detachment, bulk row deletes, asset
/// cleanup. A failing phase stops the cascade with a 500.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Profile and owned content removed
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database or asset-deletion error
pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        acting_user = auth_user.user_id,
        user_id,
        "profile deletion requested"
    );

    UserService::new(&state.db)
        .delete_profile(&state.images, user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "The profile was deleted.".to_string(),
        }),
    ))
}

/// GET /api/users/myplaces/{uid} - List the places a user owns
///
/// A user with no places gets an empty list; only a missing user is a 404.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of the user's places (possibly empty)
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_places_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, places) = UserService::new(&state.db).get_places(user_id).await?;

    let places: Vec<PlaceDto> = places.into_iter().map(PlaceDto::from_entity).collect();

    Ok((StatusCode::OK, Json(places)))
}

/// GET /api/users/favorites/{uid} - List the places a user favorited
///
/// Creators are expanded on each place. A user with no favorites gets an
/// empty list; only a missing user is a 404.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of favorited places with creators (possibly empty)
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_favorites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = UserService::new(&state.db).get_favorites(user_id).await?;

    let favorites: Vec<PlaceWithCreatorDto> = favorites
        .into_iter()
        .map(|(place, creator)| {
            PlaceWithCreatorDto::from_entities(place, UserDto::from_entity(creator))
        })
        .collect();

    Ok((StatusCode::OK, Json(favorites)))
}

/// PATCH /api/users/updatetheme/{uid} - Set the theme preference
///
/// # Returns
/// - `200 OK`: Theme updated
/// - `404 Not Found`: No user with that id
/// - `422 Unprocessable Entity`: Empty theme
/// - `500 Internal Server Error`: Database error
pub async fn update_theme(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateThemeDto>,
) -> Result<impl IntoResponse, AppError> {
    validate::require_non_empty("theme", &payload.theme)?;

    UserService::new(&state.db)
        .set_theme(user_id, &payload.theme)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Theme preference updated.".to_string(),
        }),
    ))
}

/// PATCH /api/users/notification/{uid} - Set the notification-viewed flag
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Flag updated
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn update_notification(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .set_notification_viewed(user_id, payload.viewed)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Notification preference updated.".to_string(),
        }),
    ))
}

/// PATCH /api/users/updateusernotification - Mark notifications viewed for everyone
///
/// Sweeps all users and flips the flag where it is still false; users already
/// marked are untouched, so repeating the call is a no-op.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Sweep completed
/// - `500 Internal Server Error`: Database error
pub async fn update_user_notification(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .mark_all_notifications_viewed()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Notifications marked as viewed.".to_string(),
        }),
    ))
}
