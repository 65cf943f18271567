//! Stub geocoding API server.
//!
//! Answers every request in the shape of the upstream geocoding service:
//! a JSON body with a `status` and a `results` array whose first element
//! carries `geometry.location.lat/lng`.

use std::collections::HashMap;

use axum::{extract::Query, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Handle to a running stub geocoder.
///
/// The server task is aborted when the handle is dropped.
pub struct StubGeocoder {
    /// Base URL to hand to `GeocodingClient`.
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for StubGeocoder {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns a stub geocoder that resolves every address to the given coordinates.
///
/// # Arguments
/// - `lat` - Latitude returned for every lookup
/// - `lng` - Longitude returned for every lookup
///
/// # Returns
/// - `StubGeocoder` - Handle carrying the server's base URL
pub async fn spawn(lat: f64, lng: f64) -> StubGeocoder {
    serve(move |params| {
        let address = params.get("address").cloned().unwrap_or_default();
        if address.is_empty() {
            json!({ "status": "ZERO_RESULTS", "results": [] })
        } else {
            json!({
                "status": "OK",
                "results": [
                    { "geometry": { "location": { "lat": lat, "lng": lng } } }
                ]
            })
        }
    })
    .await
}

/// Spawns a stub geocoder that reports `ZERO_RESULTS` for every address.
///
/// # Returns
/// - `StubGeocoder` - Handle carrying the server's base URL
pub async fn spawn_zero_results() -> StubGeocoder {
    serve(|_| json!({ "status": "ZERO_RESULTS", "results": [] })).await
}

async fn serve<F>(respond: F) -> StubGeocoder
where
    F: Fn(&HashMap<String, String>) -> Value + Clone + Send + Sync + 'static,
{
    let app = Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let respond = respond.clone();
            async move { Json(respond(&params)) }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub geocoder");
    let addr = listener.local_addr().expect("stub geocoder has no address");
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubGeocoder {
        base_url: format!("http://{}", addr),
        handle,
    }
}
