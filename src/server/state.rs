//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Geocoding client for address resolution
//! - Image store client for asset uploads and deletion
//! - Token signing secret for the auth layer

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{geocoding::GeocodingClient, images::ImageStoreClient},
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - both clients wrap a `reqwest::Client`, which uses an `Arc` internally
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Client for the external geocoding service.
    ///
    /// Resolves free-text addresses into coordinates during place creation
    /// and address edits.
    pub geocoder: GeocodingClient,

    /// Client for the external image host.
    ///
    /// Uploads and deletes place images and user avatars.
    pub images: ImageStoreClient,

    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client shared by both external clients
    /// - `config` - Application configuration with collaborator endpoints
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            geocoder: GeocodingClient::new(
                http_client.clone(),
                config.geocoding_api_url.clone(),
                config.geocoding_api_key.clone(),
            ),
            images: ImageStoreClient::new(
                http_client,
                config.image_host_url.clone(),
                config.image_host_key.clone(),
            ),
            jwt_secret: config.jwt_secret.clone(),
        }
    }
}
