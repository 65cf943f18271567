pub mod comment;
pub mod place;
pub mod place_favorite;
pub mod user;

pub mod prelude {
    pub use super::comment::Entity as Comment;
    pub use super::place::Entity as Place;
    pub use super::place_favorite::Entity as PlaceFavorite;
    pub use super::user::Entity as User;
}
