//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a place together with its owning user.
///
/// Convenience method that creates a user with default values and a place
/// owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, place))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_place_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::place::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let place = crate::factory::place::create_place(db, user.id).await?;

    Ok((user, place))
}

/// Creates a comment with all its dependencies.
///
/// Convenience method that creates:
/// 1. User (as place owner and comment author)
/// 2. Place owned by that user
/// 3. Comment on the place authored by the same user
///
/// Use the individual factories when the comment author must differ from
/// the place owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, place, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::place::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let place = crate::factory::place::create_place(db, user.id).await?;
    let comment = crate::factory::comment::create_comment(db, place.id, user.id).await?;

    Ok((user, place, comment))
}
