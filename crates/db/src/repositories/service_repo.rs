//! Repository for the `services` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::service::{CreateService, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_path, images, video_url, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD and media operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateService,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services
                (title, description, image_path, images, video_url, sort_order, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(&input.images)
            .bind(&input.video_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List services in display order.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM services {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_path = COALESCE($4, image_path),
                images = COALESCE($5, images),
                video_url = COALESCE($6, video_url),
                sort_order = COALESCE($7, sort_order),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(&input.images)
            .bind(&input.video_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Swap the primary image, and the gallery too when `images` is given.
    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
        images: Option<&str>,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                image_path = $2,
                images = COALESCE($3, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(image_path)
            .bind(images)
            .fetch_optional(pool)
            .await
    }

    /// Replace the gallery list. `image_path` is only filled in from
    /// `first_image` when the service has no primary image yet.
    pub async fn set_images(
        pool: &PgPool,
        id: DbId,
        images: &str,
        first_image: Option<&str>,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                images = $2,
                image_path = COALESCE(NULLIF(image_path, ''), $3, image_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(images)
            .bind(first_image)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the video reference, optionally swapping the primary
    /// image at the same time.
    pub async fn set_video(
        pool: &PgPool,
        id: DbId,
        video_url: Option<&str>,
        image_path: Option<&str>,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                video_url = $2,
                image_path = COALESCE($3, image_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(video_url)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service, returning the removed row so its files can be
    /// cleaned up.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("DELETE FROM services WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any service already references an image with this file name.
    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM services WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
