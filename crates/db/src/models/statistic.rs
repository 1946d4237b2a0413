//! Headline statistic model and DTOs.

use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `statistics` table, e.g. "Completed projects: 789".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Statistic {
    pub id: DbId,
    pub label: String,
    pub value: i32,
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatistic {
    #[validate(length(min = 1, max = 200))]
    pub label: String,
    pub value: i32,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatistic {
    #[validate(length(min = 1, max = 200))]
    pub label: Option<String>,
    pub value: Option<i32>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
