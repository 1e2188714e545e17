//! Offset/limit window shared by every list operation.

use crate::server::error::AppError;

/// Default number of rows returned when the caller gives no limit.
pub const DEFAULT_LIMIT: u64 = 100;

/// Largest limit a caller may request.
pub const MAX_LIMIT: u64 = 100;

/// Largest offset the database driver can bind. Larger offsets are clamped to it,
/// which still lands past the end of any table.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Validated offset/limit window over an id-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Number of rows to skip.
    pub offset: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl ListParams {
    /// Builds a window, rejecting a limit above `MAX_LIMIT`.
    ///
    /// # Arguments
    /// - `offset` - Rows to skip, defaults to 0 and is clamped to `MAX_OFFSET`
    /// - `limit` - Rows to return, defaults to `DEFAULT_LIMIT`
    ///
    /// # Returns
    /// - `Ok(ListParams)` - Window within bounds
    /// - `Err(AppError::Validation)` - Limit exceeds `MAX_LIMIT`
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be less than or equal to {}",
                MAX_LIMIT
            )));
        }

        Ok(Self {
            offset: offset.unwrap_or(0).min(MAX_OFFSET),
            limit,
        })
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
