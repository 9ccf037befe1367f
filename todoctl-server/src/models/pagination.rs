//! Offset pagination for list endpoints

use serde::Deserialize;

/// Default items per page
const DEFAULT_LIMIT: i64 = 10;

/// Offset/limit pagination
///
/// Values go to SQLite unchanged: a negative offset skips nothing and a
/// negative limit returns every remaining row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip
    pub skip: i64,
    /// Rows to return
    pub limit: i64,
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
