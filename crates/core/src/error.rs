//! Domain error type shared by every crate in the workspace.

use crate::types::DbId;

/// Errors produced by domain rules and surfaced to clients by the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input or a violated uniqueness rule. Maps to 400.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or unusable credentials. Maps to 401.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is known (or anonymous) but not allowed. Maps to 403.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
