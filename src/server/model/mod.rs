//! Server-side parameter types and composites.
//!
//! This module contains operation-specific parameter structs handed from the
//! controllers to the service layer, plus composite read models assembled by
//! the services. Parameters are converted from DTOs at the controller boundary
//! so the business logic never handles raw request payloads.

pub mod comment;
pub mod place;
pub mod user;
