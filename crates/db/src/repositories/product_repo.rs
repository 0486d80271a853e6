//! Repository for the `products` table.

use gamestore_core::catalog::{STATUS_DRAFT, STATUS_PUBLISHED, TYPE_DLC, TYPE_GAME};
use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_id, name, release_date, description, about, age, adult, \
                       status, product_type, developers_uuid, publishers_uuid, \
                       created_at, updated_at";

/// Provides catalog queries over games and DLCs.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// Missing `status` defaults to draft and missing `product_type` to game.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (parent_id, name, release_date, description, about, age,
                                   adult, status, product_type, developers_uuid, publishers_uuid)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.parent_id)
            .bind(&input.name)
            .bind(input.release_date)
            .bind(&input.description)
            .bind(&input.about)
            .bind(input.age)
            .bind(input.adult)
            .bind(input.status.as_deref().unwrap_or(STATUS_DRAFT))
            .bind(input.product_type.as_deref().unwrap_or(TYPE_GAME))
            .bind(input.developers_uuid)
            .bind(input.publishers_uuid)
            .fetch_one(pool)
            .await
    }

    /// Find any product (game or DLC, any status) by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published game by ID. DLCs and unpublished games are excluded.
    pub async fn find_published_game(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE id = $1 AND product_type = $2 AND status = $3"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(TYPE_GAME)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(pool)
            .await
    }

    /// Page through published games, newest release first.
    ///
    /// Games without a release date sort last; ties break on id.
    pub async fn list_published_games(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE product_type = $1 AND status = $2
             ORDER BY release_date DESC NULLS LAST, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(TYPE_GAME)
            .bind(STATUS_PUBLISHED)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All DLCs belonging to the given parent games, ordered by id.
    pub async fn list_dlcs_for(
        pool: &PgPool,
        parent_ids: &[DbId],
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE parent_id = ANY($1) AND product_type = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(parent_ids)
            .bind(TYPE_DLC)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a product. Requirements, DLCs and links cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
