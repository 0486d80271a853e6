//! Repository for `genres` and the `product_genres` link table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{Genre, ProductGenre};

pub struct GenreRepo;

impl GenreRepo {
    pub async fn create(pool: &PgPool, name: &str) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Tag a product with a genre. Tagging twice is a no-op.
    pub async fn attach(pool: &PgPool, product_id: DbId, genre_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO product_genres (product_id, genre_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(product_id)
        .bind(genre_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Genres of every product in `product_ids`, ordered by genre name.
    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<ProductGenre>, sqlx::Error> {
        sqlx::query_as::<_, ProductGenre>(
            "SELECT pg.product_id, g.id, g.name
             FROM product_genres pg
             JOIN genres g ON g.id = pg.genre_id
             WHERE pg.product_id = ANY($1)
             ORDER BY g.name",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await
    }
}
