//! Client for the external geocoding service.
//!
//! Resolves free-text addresses into coordinates. The upstream answers with a
//! `status` string and a `results` array; an empty answer is a client-facing
//! error (the address could not be resolved), while transport failures
//! propagate as internal faults.

use serde::{Deserialize, Serialize};

use crate::server::error::{upstream::UpstreamError, AppError};

/// Geocoded latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Coordinates,
}

/// Client wrapping the external geocoding API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodingClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Resolves an address into coordinates.
    ///
    /// Takes the first result when the upstream returns several candidates.
    ///
    /// # Arguments
    /// - `address` - Free-text address to resolve
    ///
    /// # Returns
    /// - `Ok(Coordinates)` - Resolved latitude/longitude
    /// - `Err(AppError::UpstreamErr)` - The address produced no results (422)
    /// - `Err(AppError::ReqwestErr)` - Transport or decoding failure (500)
    pub async fn resolve(&self, address: &str) -> Result<Coordinates, AppError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let data: GeocodeResponse = response.json().await?;

        if data.status == "ZERO_RESULTS" {
            return Err(UpstreamError::NoGeocodingResult(address.to_string()).into());
        }

        let result = data
            .results
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::NoGeocodingResult(address.to_string()))?;

        Ok(result.geometry.location)
    }
}
