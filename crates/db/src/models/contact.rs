//! Contact details and contact-form submissions.

use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_info` table: one phone number, e-mail address,
/// opening-hours line and so on.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    pub id: DbId,
    #[serde(rename = "type")]
    pub info_type: String,
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactInfo {
    /// Free-form kind, e.g. `phone`, `email`, `address`, `hours`, `whatsapp`.
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub info_type: String,
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    #[validate(length(min = 1, max = 500))]
    pub value: String,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactInfo {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub info_type: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub label: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub value: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Public contact-form payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}
