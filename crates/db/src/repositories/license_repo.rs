//! Repository for the `licenses` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::license::{CreateLicense, License, UpdateLicense};

const COLUMNS: &str =
    "id, title, image_path, description, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for license certificates.
pub struct LicenseRepo;

impl LicenseRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateLicense,
    ) -> Result<License, sqlx::Error> {
        let query = format!(
            "INSERT INTO licenses (title, image_path, description, sort_order, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, License>(&query)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<License>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM licenses WHERE id = $1");
        sqlx::query_as::<_, License>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<License>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM licenses {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, License>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLicense,
    ) -> Result<Option<License>, sqlx::Error> {
        let query = format!(
            "UPDATE licenses SET
                title = COALESCE($2, title),
                image_path = COALESCE($3, image_path),
                description = COALESCE($4, description),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, License>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<License>, sqlx::Error> {
        let query =
            format!("UPDATE licenses SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, License>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<License>, sqlx::Error> {
        let query = format!("DELETE FROM licenses WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, License>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM licenses WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
