use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The geocoding service returned no results for the supplied address.
    ///
    /// Results in a 422 Unprocessable Entity response; the address is a client
    /// input problem, not an internal fault.
    #[error("Geocoder returned no results for address {0:?}")]
    NoGeocodingResult(String),

    /// The image host rejected or failed an upload.
    ///
    /// Results in a 400 Bad Request response, distinct from the geocoding
    /// failure so clients can tell the two collaborators apart.
    #[error("Image host rejected the upload")]
    ImageUploadFailed,
}

/// Converts upstream-dependency errors into HTTP responses.
///
/// - `NoGeocodingResult` → 422 with the source's address-resolution message
/// - `ImageUploadFailed` → 400 with the source's upload-failure message
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            Self::NoGeocodingResult(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: "Could not find a location for the specified address.".to_string(),
                }),
            )
                .into_response(),
            Self::ImageUploadFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Something went wrong when uploading the image, please try again."
                        .to_string(),
                }),
            )
                .into_response(),
        }
    }
}
