//! Repository for `languages` and the `product_languages` link table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{Language, LanguageSupport, ProductLanguage};

pub struct LanguageRepo;

impl LanguageRepo {
    pub async fn create(pool: &PgPool, name: &str) -> Result<Language, sqlx::Error> {
        sqlx::query_as::<_, Language>(
            "INSERT INTO languages (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Declare which localizations `product_id` ships for `language_id`.
    ///
    /// Re-attaching the same pair overwrites the previous flags.
    pub async fn attach(
        pool: &PgPool,
        product_id: DbId,
        language_id: DbId,
        support: LanguageSupport,
    ) -> Result<ProductLanguage, sqlx::Error> {
        sqlx::query_as::<_, ProductLanguage>(
            "WITH pl AS (
                INSERT INTO product_languages (product_id, language_id, interface, subtitles, voice)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT ON CONSTRAINT uq_product_languages_pair DO UPDATE SET
                    interface = EXCLUDED.interface,
                    subtitles = EXCLUDED.subtitles,
                    voice = EXCLUDED.voice
                RETURNING *
             )
             SELECT pl.id, pl.product_id, l.name AS language, pl.interface, pl.subtitles, pl.voice
             FROM pl JOIN languages l ON l.id = pl.language_id",
        )
        .bind(product_id)
        .bind(language_id)
        .bind(support.interface)
        .bind(support.subtitles)
        .bind(support.voice)
        .fetch_one(pool)
        .await
    }

    /// Language support rows for every product in `product_ids`, ordered by id.
    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<ProductLanguage>, sqlx::Error> {
        sqlx::query_as::<_, ProductLanguage>(
            "SELECT pl.id, pl.product_id, l.name AS language, pl.interface, pl.subtitles, pl.voice
             FROM product_languages pl
             JOIN languages l ON l.id = pl.language_id
             WHERE pl.product_id = ANY($1)
             ORDER BY pl.id",
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await
    }
}
