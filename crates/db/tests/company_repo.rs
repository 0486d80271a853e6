//! Integration tests for `CompanyRepo` and the constraints behind it.

use gamestore_core::roles::Role;
use gamestore_db::models::account::CreateAccount;
use gamestore_db::models::company::{CreateCompany, UpdateCompany};
use gamestore_db::repositories::company_repo::{UQ_CREATED_BY, UQ_TITLE};
use gamestore_db::repositories::{AccountRepo, CompanyRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn developer(pool: &PgPool, username: &str) -> i64 {
    let input = CreateAccount {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "not-a-real-hash".to_string(),
        role_id: Role::Developer.id(),
    };
    AccountRepo::create(pool, &input).await.unwrap().id
}

fn new_company(title: &str) -> CreateCompany {
    CreateCompany {
        title: title.to_string(),
        description: None,
        email: "hello@studio.test".to_string(),
    }
}

fn violated_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.constraint().map(str::to_string),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_by_title(pool: PgPool) {
    let owner = developer(&pool, "dev").await;

    let created = CompanyRepo::create(&pool, owner, &new_company("Acme")).await.unwrap();
    assert_eq!(created.created_by, owner);
    assert!(created.description.is_none());

    let found = CompanyRepo::find_by_title(&pool, "Acme").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(CompanyRepo::find_by_title(&pool, "acme").await.unwrap().is_none());
    assert!(CompanyRepo::exists_for_owner(&pool, owner).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_company_violates_owner_constraint(pool: PgPool) {
    let owner = developer(&pool, "dev").await;
    CompanyRepo::create(&pool, owner, &new_company("First")).await.unwrap();

    let err = CompanyRepo::create(&pool, owner, &new_company("Second"))
        .await
        .unwrap_err();

    assert_eq!(violated_constraint(&err).as_deref(), Some(UQ_CREATED_BY));
    assert_eq!(CompanyRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_title_violates_title_constraint(pool: PgPool) {
    let a = developer(&pool, "dev_a").await;
    let b = developer(&pool, "dev_b").await;
    CompanyRepo::create(&pool, a, &new_company("Same")).await.unwrap();

    let err = CompanyRepo::create(&pool, b, &new_company("Same")).await.unwrap_err();

    assert_eq!(violated_constraint(&err).as_deref(), Some(UQ_TITLE));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_applies_only_given_fields(pool: PgPool) {
    let owner = developer(&pool, "dev").await;
    let created = CompanyRepo::create(&pool, owner, &new_company("Acme")).await.unwrap();

    let patch = UpdateCompany {
        description: Some("Makers of things".to_string()),
        ..Default::default()
    };
    let updated = CompanyRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Acme");
    assert_eq!(updated.email, "hello@studio.test");
    assert_eq!(updated.description.as_deref(), Some("Makers of things"));
    assert!(updated.updated_at >= created.updated_at);

    assert!(CompanyRepo::update(&pool, 999_999, &patch).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_and_owner_cascade(pool: PgPool) {
    let a = developer(&pool, "dev_a").await;
    let b = developer(&pool, "dev_b").await;
    let first = CompanyRepo::create(&pool, a, &new_company("A")).await.unwrap();
    CompanyRepo::create(&pool, b, &new_company("B")).await.unwrap();

    assert!(CompanyRepo::delete(&pool, first.id).await.unwrap());
    assert!(!CompanyRepo::delete(&pool, first.id).await.unwrap());
    assert_eq!(CompanyRepo::count(&pool).await.unwrap(), 1);

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(b)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(CompanyRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_title_length_is_checked_in_database(pool: PgPool) {
    let owner = developer(&pool, "dev").await;

    let result = CompanyRepo::create(&pool, owner, &new_company(&"x".repeat(51))).await;

    assert!(result.is_err(), "titles over 50 characters must be rejected");
}
