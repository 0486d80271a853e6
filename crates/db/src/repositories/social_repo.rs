//! Repository for the `product_socials` table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::social::{CreateSocial, Social};

pub struct SocialRepo;

impl SocialRepo {
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateSocial,
    ) -> Result<Social, sqlx::Error> {
        sqlx::query_as::<_, Social>(
            "INSERT INTO product_socials (product_id, social_type, url)
             VALUES ($1, $2, $3)
             RETURNING id, product_id, social_type, url",
        )
        .bind(product_id)
        .bind(&input.social_type)
        .bind(&input.url)
        .fetch_one(pool)
        .await
    }

    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<Social>, sqlx::Error> {
        sqlx::query_as::<_, Social>(
            "SELECT id, product_id, social_type, url FROM product_socials
             WHERE product_id = ANY($1)
             ORDER BY id",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await
    }
}
