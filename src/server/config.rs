use crate::server::error::{config::ConfigError, AppError};

const GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_PORT: u16 = 4000;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub geocoding_api_url: String,
    pub geocoding_api_key: String,

    pub image_host_url: String,
    pub image_host_key: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            geocoding_api_url: std::env::var("GEOCODING_API_URL")
                .unwrap_or_else(|_| GEOCODING_API_URL.to_string()),
            geocoding_api_key: std::env::var("GEOCODING_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("GEOCODING_API_KEY".to_string()))?,
            image_host_url: std::env::var("IMAGE_HOST_URL")
                .map_err(|_| ConfigError::MissingEnvVar("IMAGE_HOST_URL".to_string()))?,
            image_host_key: std::env::var("IMAGE_HOST_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("IMAGE_HOST_KEY".to_string()))?,
            port,
        })
    }
}
