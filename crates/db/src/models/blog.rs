//! Blog post model and DTOs.

use geoline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogPost {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    #[validate(length(max = 100))]
    pub author: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub is_published: Option<bool>,
    /// Set by the handler when the post is created already published.
    #[serde(skip)]
    pub published_at: Option<Timestamp>,
}

/// DTO for updating a blog post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBlogPost {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub image_path: Option<String>,
    #[validate(length(max = 100))]
    pub author: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}
