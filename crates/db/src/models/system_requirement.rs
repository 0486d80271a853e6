//! System requirement model and DTO.

use gamestore_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from `system_requirements`. Belongs to exactly one product.
#[derive(Debug, Clone, FromRow)]
pub struct SystemRequirement {
    pub id: DbId,
    pub game_id: DbId,
    pub operating_system: String,
    pub device_processor: String,
    pub device_memory: String,
    pub device_storage: String,
    pub device_graphics: String,
    /// `minimum` or `recommended`.
    pub type_requirements: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSystemRequirement {
    pub operating_system: String,
    #[serde(default)]
    pub device_processor: String,
    #[serde(default)]
    pub device_memory: String,
    #[serde(default)]
    pub device_storage: String,
    #[serde(default)]
    pub device_graphics: String,
    /// Defaults to `minimum`.
    pub type_requirements: Option<String>,
}
