use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    gamestore_db::health_check(&pool).await.unwrap();

    let roles: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(
        roles,
        vec![
            (1, "admin".to_string()),
            (2, "developer".to_string()),
            (3, "customer".to_string()),
        ]
    );

    let tables = [
        "accounts",
        "companies",
        "products",
        "system_requirements",
        "languages",
        "product_languages",
        "genres",
        "product_genres",
        "product_socials",
    ];
    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Role ids in the database match the ids compiled into the core crate.
#[sqlx::test(migrations = "./migrations")]
async fn test_role_ids_match_core(pool: PgPool) {
    use gamestore_core::roles::Role;

    for role in [Role::Admin, Role::Developer, Role::Customer] {
        let name: (String,) = sqlx::query_as("SELECT name FROM roles WHERE id = $1")
            .bind(role.id())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(name.0, role.as_str());
    }
}
