//! Shared query parameter types for API handlers.

use gamestore_core::catalog::{clamp_limit, clamp_offset};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)` ready to bind into a query.
    pub fn resolve(&self) -> (i64, i64) {
        (clamp_limit(self.limit), clamp_offset(self.offset))
    }
}
