//! Repository for the `portfolio_projects` table.

use geoline_core::content::ProjectStatus;
use geoline_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::portfolio::{
    CreatePortfolioProject, PortfolioProject, UpdatePortfolioProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_path, status, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new project. `status` defaults to `future`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreatePortfolioProject,
    ) -> Result<PortfolioProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_projects
                (title, description, image_path, status, sort_order, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 'future'), COALESCE($5, 0), COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_projects WHERE id = $1");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects in display order, optionally narrowed to one status.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
        status: Option<ProjectStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PortfolioProject>, sqlx::Error> {
        let active = if active_only { "AND is_active = true" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_projects \
             WHERE ($1::text IS NULL OR status = $1) {active} \
             ORDER BY sort_order ASC, id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(status.map(ProjectStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioProject,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_path = COALESCE($4, image_path),
                status = COALESCE($5, status),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_projects SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!("DELETE FROM portfolio_projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any project already references an image with this file name.
    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM portfolio_projects WHERE right(image_path, length($1)) = $1)",
        )
        .bind(file_name)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
