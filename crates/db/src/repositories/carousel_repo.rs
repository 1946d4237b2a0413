//! Repository for the `carousel_slides` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::carousel::{CarouselSlide, CreateCarouselSlide, UpdateCarouselSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, image_path, button_text, button_link, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for carousel slides.
pub struct CarouselRepo;

impl CarouselRepo {
    /// Insert a new slide, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateCarouselSlide,
    ) -> Result<CarouselSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO carousel_slides
                (title, subtitle, image_path, button_text, button_link, sort_order, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.button_text)
            .bind(&input.button_link)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarouselSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carousel_slides WHERE id = $1");
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List slides in display order.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CarouselSlide>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM carousel_slides {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a slide. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarouselSlide,
    ) -> Result<Option<CarouselSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE carousel_slides SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image_path = COALESCE($4, image_path),
                button_text = COALESCE($5, button_text),
                button_link = COALESCE($6, button_link),
                sort_order = COALESCE($7, sort_order),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.button_text)
            .bind(&input.button_link)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Point a slide at a newly stored image.
    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<CarouselSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE carousel_slides SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide, returning the removed row so its image can be cleaned up.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<CarouselSlide>, sqlx::Error> {
        let query = format!("DELETE FROM carousel_slides WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any slide already references an image with this file name.
    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM carousel_slides WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
