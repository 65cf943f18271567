//! Loopback stub servers for external collaborators.
//!
//! This module provides small axum servers bound to an ephemeral loopback
//! port that imitate the wire behavior of the geocoding API and the image
//! host. Tests construct the real HTTP clients against the stub's
//! `base_url`, so service-layer tests exercise the production request and
//! response handling without network access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::stub;
//!
//! #[tokio::test]
//! async fn test_place_creation() {
//!     let geocoder = stub::geocoder::spawn(40.7484, -73.9857).await;
//!     let images = stub::image_host::spawn().await;
//!
//!     // Point GeocodingClient / ImageStoreClient at geocoder.base_url
//!     // and images.base_url ...
//! }
//! ```
//!
//! Each stub aborts its server task on drop.

pub mod geocoder;
pub mod image_host;
