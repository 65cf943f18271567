//! User DTOs and profile validation bounds.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::patch::Patch;

/// Minimum length of a display name.
pub const NAME_MIN_LEN: usize = 4;
/// Minimum length of a password.
pub const PASSWORD_MIN_LEN: usize = 5;

/// Public representation of a user. The stored password hash never leaves
/// the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub theme_preference: String,
    pub notification_viewed: bool,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            avatar_url: entity.avatar_url,
            theme_preference: entity.theme_preference,
            notification_viewed: entity.notification_viewed,
        }
    }
}

/// Response body for signup and login: the user plus the issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub user_id: i32,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub theme: String,
    pub notification: bool,
    /// Avatar image payload; omitted to register without an avatar.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Password change request inside a profile edit. The current password is
/// verified against the stored hash before the new one is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChangeDto {
    pub current: String,
    pub new: String,
}

/// Partial profile update. Omitted fields are left unchanged; the avatar
/// supports keep / replace / explicit-remove through [`Patch`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<PasswordChangeDto>,
    #[serde(default)]
    pub avatar: Patch<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateThemeDto {
    pub theme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotificationDto {
    pub viewed: bool,
}
