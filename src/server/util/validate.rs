//! Input validation helpers shared by the controllers.
//!
//! Each helper returns `AppError::Validation` (422) describing the offending
//! field, so controllers can chain checks with `?` before touching the data
//! layer.

use crate::server::error::AppError;

/// Rejects values that are empty or whitespace-only.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "The {} must not be empty.",
            field
        )));
    }
    Ok(())
}

/// Rejects values longer than `max` characters.
pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "The {} must be at most {} characters long.",
            field, max
        )));
    }
    Ok(())
}

/// Rejects values shorter than `min` characters.
pub fn require_min_len(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "The {} must be at least {} characters long.",
            field, min
        )));
    }
    Ok(())
}

/// Rejects values that do not look like an email address.
///
/// Intentionally loose: one `@`, a non-empty local part, and a dotted domain.
/// Real validation happens when mail is actually sent.
pub fn require_email(field: &str, value: &str) -> Result<(), AppError> {
    let valid = value
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        })
        .unwrap_or(false);

    if !valid {
        return Err(AppError::Validation(format!(
            "The {} must be a valid email address.",
            field
        )));
    }
    Ok(())
}
