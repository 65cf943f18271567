//! API data transfer objects.
//!
//! This module contains the serde types exchanged over the HTTP surface:
//! request payloads, response bodies, and the generic error/message shapes.
//! DTOs are converted from entity models at the controller boundary and never
//! expose stored credentials.

pub mod api;
pub mod comment;
pub mod patch;
pub mod place;
pub mod user;
