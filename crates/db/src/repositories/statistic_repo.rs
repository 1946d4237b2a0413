//! Repository for the `statistics` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use super::active_filter;
use crate::models::statistic::{CreateStatistic, Statistic, UpdateStatistic};

const COLUMNS: &str = "id, label, value, icon, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for headline statistics.
pub struct StatisticRepo;

impl StatisticRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateStatistic,
    ) -> Result<Statistic, sqlx::Error> {
        let query = format!(
            "INSERT INTO statistics (label, value, icon, sort_order, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Statistic>(&query)
            .bind(&input.label)
            .bind(input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Statistic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statistics WHERE id = $1");
        sqlx::query_as::<_, Statistic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Statistic>, sqlx::Error> {
        let filter = active_filter(active_only);
        let query = format!(
            "SELECT {COLUMNS} FROM statistics {filter} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Statistic>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStatistic,
    ) -> Result<Option<Statistic>, sqlx::Error> {
        let query = format!(
            "UPDATE statistics SET
                label = COALESCE($2, label),
                value = COALESCE($3, value),
                icon = COALESCE($4, icon),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Statistic>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM statistics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a statistic with this label already exists.
    pub async fn label_exists<'e>(
        executor: impl PgExecutor<'e>,
        label: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM statistics WHERE label = $1)")
                .bind(label)
                .fetch_one(executor)
                .await?;
        Ok(row.0)
    }
}
