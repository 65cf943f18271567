use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer-token verification failed on a gated route.
    ///
    /// Covers a missing authorization header, a malformed token, and an
    /// expired or invalid signature alike; no distinction is surfaced to the
    /// caller. Results in a 403 Forbidden response.
    #[error("Token verification failed")]
    AuthenticationFailed,

    /// Login failed because of an unknown email or a wrong password.
    ///
    /// Both causes share one message so the response carries no account
    /// enumeration signal. Results in a 401 Unauthorized response.
    #[error("Login rejected for invalid credentials")]
    InvalidCredentials,

    /// Profile edit supplied a current password that does not match the
    /// stored hash. Results in a 401 Unauthorized response.
    #[error("Current password mismatch on profile edit")]
    WrongPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `AuthenticationFailed` → 403 Forbidden with a uniform message regardless of cause
/// - `InvalidCredentials` → 401 Unauthorized, identical for unknown email and wrong password
/// - `WrongPassword` → 401 Unauthorized for a rejected password change
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationFailed => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Authentication failed!".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password, try again.".to_string(),
                }),
            )
                .into_response(),
            Self::WrongPassword => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "The current password is not correct.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
