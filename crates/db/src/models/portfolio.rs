//! Portfolio project model and DTOs.

use geoline_core::content::ProjectStatus;
use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `portfolio_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioProject {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio project. `status` defaults to `future`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub status: Option<ProjectStatus>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a portfolio project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub image_path: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
