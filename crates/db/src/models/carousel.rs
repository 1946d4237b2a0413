//! Carousel slide model and DTOs.

use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `carousel_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarouselSlide {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_path: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a slide. The image is stored before the row is inserted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCarouselSlide {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 200))]
    pub subtitle: Option<String>,
    pub image_path: String,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    #[validate(length(max = 500))]
    pub button_link: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a slide. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCarouselSlide {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 200))]
    pub subtitle: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub image_path: Option<String>,
    #[validate(length(max = 50))]
    pub button_text: Option<String>,
    #[validate(length(max = 500))]
    pub button_link: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
