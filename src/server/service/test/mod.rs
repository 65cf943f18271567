use crate::server::service::{geocoding::GeocodingClient, images::ImageStoreClient};
use test_utils::stub::{geocoder::StubGeocoder, image_host::StubImageHost};

mod place;
mod user;

fn geocoder_client(stub: &StubGeocoder) -> GeocodingClient {
    GeocodingClient::new(
        reqwest::Client::new(),
        stub.base_url.clone(),
        "test-key".to_string(),
    )
}

fn image_client(stub: &StubImageHost) -> ImageStoreClient {
    ImageStoreClient::new(
        reqwest::Client::new(),
        stub.base_url.clone(),
        "test-key".to_string(),
    )
}
