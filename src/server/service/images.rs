//! Client for the external image host.
//!
//! Uploads place images and user avatars and deletes assets during edits and
//! cascade deletes. Uploads answer with a stable asset id (`public_id`) and a
//! serving URL (`secure_url`); both are persisted with the owning record.

use serde::Deserialize;
use serde_json::json;

use crate::server::error::{upstream::UpstreamError, AppError};

/// Folder on the image host for place photos.
pub const PLACE_IMAGE_FOLDER: &str = "places";
/// Folder on the image host for user avatars.
pub const AVATAR_FOLDER: &str = "avatars";

/// An asset as stored on the image host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredImage {
    /// Stable asset identifier used for later deletion.
    #[serde(rename = "public_id")]
    pub asset_id: String,
    /// Public serving URL.
    #[serde(rename = "secure_url")]
    pub url: String,
}

/// Client wrapping the external asset host.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct ImageStoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ImageStoreClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Uploads an image payload into the given folder.
    ///
    /// Any rejection by the host, including an undecodable answer, surfaces
    /// as the client-facing upload error so callers can distinguish it from a
    /// geocoding failure.
    ///
    /// # Arguments
    /// - `folder` - Target folder on the host (`places` or `avatars`)
    /// - `image` - Image payload as submitted by the client
    ///
    /// # Returns
    /// - `Ok(StoredImage)` - Asset id and serving URL
    /// - `Err(AppError::UpstreamErr)` - Host rejected the upload (400)
    /// - `Err(AppError::ReqwestErr)` - Transport failure (500)
    pub async fn upload(&self, folder: &str, image: &str) -> Result<StoredImage, AppError> {
        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .json(&json!({
                "file": image,
                "folder": folder,
                "api_key": self.api_key,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::ImageUploadFailed.into());
        }

        response
            .json::<StoredImage>()
            .await
            .map_err(|_| UpstreamError::ImageUploadFailed.into())
    }

    /// Deletes an asset by id.
    ///
    /// # Arguments
    /// - `asset_id` - Asset identifier returned by a prior upload
    ///
    /// # Returns
    /// - `Ok(())` - Asset deleted
    /// - `Err(AppError::InternalError)` - Host refused the deletion (500)
    /// - `Err(AppError::ReqwestErr)` - Transport failure (500)
    pub async fn delete(&self, asset_id: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/destroy", self.base_url))
            .json(&json!({
                "public_id": asset_id,
                "api_key": self.api_key,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Image host failed to delete asset {}",
                asset_id
            )));
        }

        Ok(())
    }
}
