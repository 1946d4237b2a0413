//! Repository for the `partners` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::partner::{CreatePartner, Partner, UpdatePartner};

const COLUMNS: &str =
    "id, name, image_path, website_url, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for partner logos.
pub struct PartnerRepo;

impl PartnerRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePartner,
    ) -> Result<Partner, sqlx::Error> {
        let query = format!(
            "INSERT INTO partners (name, image_path, website_url, sort_order, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.name)
            .bind(&input.image_path)
            .bind(&input.website_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners WHERE id = $1");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Partner>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM partners {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartner,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!(
            "UPDATE partners SET
                name = COALESCE($2, name),
                image_path = COALESCE($3, image_path),
                website_url = COALESCE($4, website_url),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_path)
            .bind(&input.website_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query =
            format!("UPDATE partners SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("DELETE FROM partners WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM partners WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
