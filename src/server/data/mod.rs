//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work on SeaORM entity models and keep each query
//! narrow; cross-entity procedures such as the cascade deletes are composed in the service
//! layer from these building blocks. All database queries, inserts, updates, and deletes are
//! performed through these repositories.

pub mod comment;
pub mod favorite;
pub mod place;
pub mod user;
