//! Bearer-token authentication middleware.
//!
//! Stateless check applied to the gated route groups: the token travels in
//! the `Authorization: Bearer <token>` header and is verified against the
//! configured signing secret. `OPTIONS` requests pass through untouched so
//! CORS preflights never fail authentication. Every verification failure -
//! missing header, malformed token, expired or invalid signature - yields the
//! same 403 response with no cause distinction.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    state::AppState,
};

/// Identity attached to the request extensions after verification.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Id of the user the token was issued for.
    pub user_id: i32,
}

/// Verifies the bearer token and forwards the request.
///
/// # Returns
/// - The inner handler's response when the token verifies (or the request is
///   a CORS preflight)
/// - 403 Forbidden for any verification failure
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflights carry no credentials
    if request.method() == Method::OPTIONS {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::AuthenticationFailed)?;

    let claims = AuthService::new(&state.jwt_secret).verify_token(token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
    });

    Ok(next.run(request).await)
}
