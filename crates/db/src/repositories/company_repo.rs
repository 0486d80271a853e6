//! Repository for the `companies` table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, email, created_by, created_at, updated_at";

/// Unique constraint enforcing one company per developer.
pub const UQ_CREATED_BY: &str = "uq_companies_created_by";

/// Unique constraint on the company title.
pub const UQ_TITLE: &str = "uq_companies_title";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a company owned by `created_by`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (title, description, email, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.email)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its title (case-sensitive).
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE title = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Whether the given account already owns a company.
    pub async fn exists_for_owner(pool: &PgPool, owner_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM companies WHERE created_by = $1)",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await
    }

    /// Update a company. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                email = COALESCE($4, email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a company by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of companies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(pool)
            .await
    }
}
