//! Repository for the `contact_info` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::contact::{ContactInfo, CreateContactInfo, UpdateContactInfo};

const COLUMNS: &str =
    "id, info_type, label, value, icon, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for contact details.
pub struct ContactInfoRepo;

impl ContactInfoRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateContactInfo,
    ) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info (info_type, label, value, icon, sort_order, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&input.info_type)
            .bind(&input.label)
            .bind(&input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info WHERE id = $1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactInfo>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM contact_info {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactInfo,
    ) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_info SET
                info_type = COALESCE($2, info_type),
                label = COALESCE($3, label),
                value = COALESCE($4, value),
                icon = COALESCE($5, icon),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(id)
            .bind(&input.info_type)
            .bind(&input.label)
            .bind(&input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_info WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a detail with this type and label already exists.
    pub async fn exists<'e>(
        executor: impl PgExecutor<'e>,
        info_type: &str,
        label: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM contact_info WHERE info_type = $1 AND label = $2)",
        )
        .bind(info_type)
        .bind(label)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
