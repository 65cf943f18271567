//! Password hashing and bearer-token issuance/verification.
//!
//! Passwords are stored as bcrypt hashes with a fixed cost factor. Tokens are
//! HS256 JWTs binding the user id and email with a one-hour expiry; any
//! verification failure collapses into the uniform authentication error so
//! callers cannot distinguish a missing token from a bad signature.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// bcrypt cost factor for stored password hashes.
pub const HASH_COST: u32 = 12;

/// Token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 1;

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Id of the authenticated user.
    pub user_id: i32,
    /// Email the token was issued for.
    pub email: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Stateless auth operations over the configured signing secret.
pub struct AuthService<'a> {
    secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(secret: &'a str) -> Self {
        Self { secret }
    }

    /// Hashes a raw password for storage.
    ///
    /// # Returns
    /// - `Ok(String)` - bcrypt hash at [`HASH_COST`]
    /// - `Err(AppError::BcryptErr)` - Hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(password, HASH_COST)?)
    }

    /// Verifies a raw password against a stored hash.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the password matches
    /// - `Err(AppError::BcryptErr)` - The stored hash is malformed
    pub fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        Ok(bcrypt::verify(password, password_hash)?)
    }

    /// Issues a signed token binding the user id and email.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT expiring in one hour
    /// - `Err(AppError::TokenErr)` - Encoding failed
    pub fn issue_token(&self, user_id: i32, email: &str) -> Result<String, AppError> {
        let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
        let claims = TokenClaims {
            user_id,
            email: email.to_string(),
            exp,
        };

        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// Every failure mode maps to the same `AuthenticationFailed` error.
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - Decoded claims of a valid token
    /// - `Err(AppError::AuthErr)` - Malformed, expired, or tampered token
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let data = jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::AuthenticationFailed)?;

        Ok(data.claims)
    }
}
