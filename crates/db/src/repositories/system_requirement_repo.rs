//! Repository for the `system_requirements` table.

use gamestore_core::catalog::REQUIREMENTS_MINIMUM;
use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::system_requirement::{CreateSystemRequirement, SystemRequirement};

const COLUMNS: &str = "id, game_id, operating_system, device_processor, device_memory, \
                       device_storage, device_graphics, type_requirements";

pub struct SystemRequirementRepo;

impl SystemRequirementRepo {
    /// Attach a requirement set to a product.
    pub async fn create(
        pool: &PgPool,
        game_id: DbId,
        input: &CreateSystemRequirement,
    ) -> Result<SystemRequirement, sqlx::Error> {
        let query = format!(
            "INSERT INTO system_requirements
                (game_id, operating_system, device_processor, device_memory,
                 device_storage, device_graphics, type_requirements)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SystemRequirement>(&query)
            .bind(game_id)
            .bind(&input.operating_system)
            .bind(&input.device_processor)
            .bind(&input.device_memory)
            .bind(&input.device_storage)
            .bind(&input.device_graphics)
            .bind(
                input
                    .type_requirements
                    .as_deref()
                    .unwrap_or(REQUIREMENTS_MINIMUM),
            )
            .fetch_one(pool)
            .await
    }

    /// Requirements for every product in `game_ids`, ordered by id.
    pub async fn list_for_products(
        pool: &PgPool,
        game_ids: &[DbId],
    ) -> Result<Vec<SystemRequirement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM system_requirements WHERE game_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, SystemRequirement>(&query)
            .bind(game_ids)
            .fetch_all(pool)
            .await
    }
}
