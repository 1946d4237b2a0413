//! Repository for the `about_content` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::about::{AboutContent, CreateAboutContent, UpdateAboutContent};

const COLUMNS: &str =
    "id, title, subtitle, description, image_path, is_active, created_at, updated_at";

/// Provides CRUD operations for about-page content.
pub struct AboutRepo;

impl AboutRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_content (title, subtitle, description, image_path, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content WHERE id = $1");
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List records, oldest first.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AboutContent>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM about_content {filter} \
             ORDER BY id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAboutContent,
    ) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!(
            "UPDATE about_content SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                description = COALESCE($4, description),
                image_path = COALESCE($5, image_path),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<AboutContent>, sqlx::Error> {
        let query =
            format!("UPDATE about_content SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("DELETE FROM about_content WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM about_content WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
