//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let place = factory::place::create_place(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, place, comment) =
//!         factory::helpers::create_comment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Alice")
//!     .email("a@x.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `place` - Create place entities
//! - `comment` - Create comment entities
//! - `place_favorite` - Create favorite relation rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod comment;
pub mod helpers;
pub mod place;
pub mod place_favorite;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use place::create_place;
pub use place_favorite::create_favorite;
pub use user::create_user;
