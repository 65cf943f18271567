//! Favorite relation factory.
//!
//! Creates rows in the place/user favorite relation for tests that exercise
//! favorite bookkeeping and the cascade deletes that scrub it.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite marker between the given user and place.
///
/// # Arguments
/// - `db` - Database connection
/// - `place_id` - Id of the favorited place (must exist)
/// - `user_id` - Id of the favoriting user (must exist)
///
/// # Returns
/// - `Ok(entity::place_favorite::Model)` - Created relation row
/// - `Err(DbErr)` - Database error during insert (including duplicates)
pub async fn create_favorite(
    db: &DatabaseConnection,
    place_id: i32,
    user_id: i32,
) -> Result<entity::place_favorite::Model, DbErr> {
    entity::place_favorite::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
