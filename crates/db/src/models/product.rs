//! Product entity model and DTOs. Games and DLCs share this row type.

use gamestore_core::types::{Date, DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    /// Parent game for DLCs, `None` for games.
    pub parent_id: Option<DbId>,
    pub name: String,
    pub release_date: Option<Date>,
    pub description: String,
    pub about: String,
    /// Minimum player age.
    pub age: i32,
    pub adult: bool,
    pub status: String,
    pub product_type: String,
    pub developers_uuid: Option<Uuid>,
    pub publishers_uuid: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product.
///
/// `status` defaults to `draft` and `product_type` to `game` when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub parent_id: Option<DbId>,
    pub name: String,
    pub release_date: Option<Date>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub adult: bool,
    pub status: Option<String>,
    pub product_type: Option<String>,
    pub developers_uuid: Option<Uuid>,
    pub publishers_uuid: Option<Uuid>,
}
