//! Limit/offset pagination for song listings.

use crate::error::CoreError;

/// Default number of songs per listing page.
pub const DEFAULT_LIST_LIMIT: i64 = 11;

/// Maximum number of songs per listing page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// A validated listing window: `limit` rows starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    offset: i64,
}

impl PageRequest {
    /// Validate caller-supplied pagination.
    ///
    /// - absent or zero `limit` falls back to [`DEFAULT_LIST_LIMIT`]
    /// - absent `offset` is 0
    /// - negative values and a `limit` above [`MAX_LIST_LIMIT`] are
    ///   validation errors, never clamped
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Result<Self, CoreError> {
        let limit = match limit {
            None | Some(0) => DEFAULT_LIST_LIMIT,
            Some(l) if l < 0 => {
                return Err(CoreError::Validation(format!(
                    "limit must not be negative, got {l}"
                )))
            }
            Some(l) if l > MAX_LIST_LIMIT => {
                return Err(CoreError::Validation(format!(
                    "limit must not exceed {MAX_LIST_LIMIT}, got {l}"
                )))
            }
            Some(l) => l,
        };
        let offset = match offset {
            Some(o) if o < 0 => {
                return Err(CoreError::Validation(format!(
                    "offset must not be negative, got {o}"
                )))
            }
            other => other.unwrap_or(0),
        };
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
