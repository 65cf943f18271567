use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::server::{
    controller::{comment, homepage, place, user},
    error::AppError,
    middleware::auth::require_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        place::get_place_by_id,
        place::create_place,
        place::update_favorites,
        place::update_share_count,
        place::update_place,
        place::delete_place,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
    ),
    tags(
        (name = "place", description = "Place listings with geocoded addresses and images"),
        (name = "comment", description = "Comments on places")
    )
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Could not find this route.".to_string())
}

pub fn router(state: AppState) -> Router {
    let open_routes = Router::new()
        .route("/api/places/{pid}", get(place::get_place_by_id))
        .route("/api/places/shareplace/{pid}", patch(place::update_share_count))
        .route("/api/users", get(user::get_all_users))
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users/updatetheme/{uid}", patch(user::update_theme))
        .route("/homepage", get(homepage::get_all_places))
        .route("/homepage/comments", get(homepage::get_all_comments));

    let gated_routes = Router::new()
        .route("/api/places/newplace", post(place::create_place))
        .route("/api/places/favoriteplace/{pid}", patch(place::update_favorites))
        .route("/api/places/editplace/{pid}", patch(place::update_place))
        .route("/api/places/deleteplace/{pid}", delete(place::delete_place))
        .route("/api/places/{pid}/newcomment", post(comment::create_comment))
        .route(
            "/api/places/{pid}/editcomment/{cid}",
            patch(comment::update_comment),
        )
        .route(
            "/api/places/{pid}/deletecomment/{cid}",
            delete(comment::delete_comment),
        )
        .route("/api/users/profile/{uid}", get(user::get_user_by_id))
        .route(
            "/api/users/profile/editprofile/{uid}",
            patch(user::update_profile),
        )
        .route(
            "/api/users/profile/deleteprofile/{uid}",
            delete(user::delete_profile),
        )
        .route("/api/users/myplaces/{uid}", get(user::get_places_by_user))
        .route("/api/users/favorites/{uid}", get(user::get_favorites_by_user))
        .route("/api/users/notification/{uid}", patch(user::update_notification))
        .route(
            "/api/users/updateusernotification",
            patch(user::update_user_notification),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(open_routes)
        .merge(gated_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
