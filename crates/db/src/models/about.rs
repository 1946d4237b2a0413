//! About-page content model and DTOs.

use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `about_content` table. The site shows a single record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutContent {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAboutContent {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 200))]
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAboutContent {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 200))]
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
}
