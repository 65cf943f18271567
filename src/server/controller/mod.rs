//! HTTP request handlers.
//!
//! One module per resource. Controllers validate input, convert DTOs to
//! parameter models, call the service layer, and shape the response DTOs.
//! Access control is applied in the router through the auth middleware rather
//! than inside individual handlers.

pub mod comment;
pub mod homepage;
pub mod place;
pub mod user;
