//! Product social links.

use gamestore_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from `product_socials`.
#[derive(Debug, Clone, FromRow)]
pub struct Social {
    pub id: DbId,
    pub product_id: DbId,
    /// Free-form network name, e.g. `discord` or `youtube`.
    pub social_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocial {
    pub social_type: String,
    pub url: String,
}
