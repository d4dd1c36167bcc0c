//! Field-level validation shared by the catalog and the enrichment client.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

/// Storage and wire format of release dates.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reject empty or whitespace-only values for a required text field.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Check that `value` is a calendar date in `YYYY-MM-DD` form.
pub fn validate_release_date(value: &str) -> Result<(), CoreError> {
    // chrono accepts single-digit months/days, the wire format does not.
    let well_formed = value.len() == 10
        && NaiveDate::parse_from_str(value, RELEASE_DATE_FORMAT).is_ok();
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "releaseDate must be YYYY-MM-DD, got '{value}'"
        )));
    }
    Ok(())
}

/// Identifiers are BIGSERIAL values and therefore always positive.
pub fn validate_id(id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "id must be a positive integer, got {id}"
        )));
    }
    Ok(())
}
