//! User operation parameters.

use crate::model::{
    patch::Patch,
    user::{LoginDto, SignupDto, UpdateProfileDto},
};
use crate::server::service::images::StoredImage;

/// Parameters for registering a new account.
///
/// The password confirmation is checked at the controller and never reaches
/// the service layer; only the raw password travels here, to be hashed before
/// persistence.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub theme_preference: String,
    pub notification_viewed: bool,
    /// Avatar image payload; `None` registers with a placeholder asset.
    pub image: Option<String>,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            theme_preference: dto.theme,
            notification_viewed: dto.notification,
            image: dto.image,
        }
    }
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Requested password change inside a profile edit.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

/// Parameters for a partial profile update.
///
/// `None` fields are left unchanged. The avatar patch distinguishes keep,
/// replace-with-new, and explicit-remove.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<PasswordChange>,
    pub avatar: Patch<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password.map(|change| PasswordChange {
                current: change.current,
                new: change.new,
            }),
            avatar: dto.avatar,
        }
    }
}

/// Column values for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_asset_id: String,
    pub avatar_url: String,
    pub theme_preference: String,
    pub notification_viewed: bool,
}

/// Resolved column updates applied by the repository during a profile edit.
///
/// Produced by the service after password verification and avatar handling;
/// every `Some` field is written, everything else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar: Option<StoredImage>,
}
