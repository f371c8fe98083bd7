//! Field rules shared by every trip and child record.
//!
//! Required strings must be non-empty after trimming; optional strings
//! collapse to `None` when blank. Lengths are counted in characters on the
//! trimmed value. Coordinates, quantities and night numbers have no range checks.

use crate::error::CoreError;

/// Limit for trip, point, gear and food names.
pub const MAX_NAME_LEN: usize = 200;

/// Limit for night campsites.
pub const MAX_CAMPSITE_LEN: usize = 200;

/// Limit for point icon and color tags.
pub const MAX_TAG_LEN: usize = 50;

/// Default `quantity` for gear and food when the client omits it.
pub const DEFAULT_QUANTITY: i32 = 1;

/// Validate a required string field and return its trimmed value.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_length(field, trimmed, max_len)?;
    Ok(trimmed.to_string())
}

/// Validate an optional string field.
///
/// Blank input becomes `None`. `max_len` of `None` means unbounded.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) -> Result<Option<String>, CoreError> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if let Some(max) = max_len {
        check_length(field, trimmed, max)?;
    }
    Ok(Some(trimmed.to_string()))
}

fn check_length(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}
