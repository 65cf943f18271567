use super::image_client;
use crate::model::patch::Patch;
use crate::server::{
    data::{comment::CommentRepository, favorite::FavoriteRepository, place::PlaceRepository},
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, PasswordChange, SignupParams, UpdateProfileParams},
    service::{auth::AuthService, user::UserService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, stub};

mod signup_login;
mod update_profile;

fn signup_params(email: &str) -> SignupParams {
    SignupParams {
        name: "Alice".to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        theme_preference: "light".to_string(),
        notification_viewed: false,
        image: None,
    }
}
