use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    geoline_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "carousel_slides",
        "services",
        "portfolio_projects",
        "blog_posts",
        "faqs",
        "about_content",
        "contact_info",
        "contact_submissions",
        "statistics",
        "partners",
        "licenses",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The services media columns come from their own migrations.
#[sqlx::test(migrations = "./migrations")]
async fn test_services_media_columns_exist(pool: PgPool) {
    let columns: Vec<(String,)> = sqlx::query_as(
        "SELECT column_name::text FROM information_schema.columns
         WHERE table_name = 'services' AND column_name IN ('images', 'video_url')
         ORDER BY column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c.0.as_str()).collect();
    assert_eq!(names, ["images", "video_url"]);
}

/// `updated_at` is bumped by the trigger on every update.
#[sqlx::test(migrations = "./migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, created): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO faqs (question, answer, updated_at)
         VALUES ('q', 'a', NOW() - INTERVAL '1 hour')
         RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let (updated,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE faqs SET answer = 'b' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(updated > created);
}

/// Portfolio status is constrained to the known values.
#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_status_check(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO portfolio_projects (title, image_path, status) VALUES ('x', 'p.jpg', 'archived')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
