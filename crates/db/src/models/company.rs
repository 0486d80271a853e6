//! Company entity model and DTOs.

use gamestore_core::company::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use gamestore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub email: String,
    /// Account id of the owning developer.
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company. The owner comes from the caller, never the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "title must be 1-50 characters"))]
    pub title: String,
    #[validate(length(max = MAX_DESCRIPTION_LEN, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// DTO for updating a company. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "title must be 1-50 characters"))]
    pub title: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}
