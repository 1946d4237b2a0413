//! Repository for the `blog_posts` table.

use sqlx::{PgExecutor, PgPool};
use geoline_core::types::DbId;

use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

const COLUMNS: &str = "id, title, excerpt, content, image_path, author, category, \
                       is_published, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts
                (title, excerpt, content, image_path, author, category, is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.image_path)
            .bind(&input.author)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts, newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts {filter} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                excerpt = COALESCE($3, excerpt),
                content = COALESCE($4, content),
                image_path = COALESCE($5, image_path),
                author = COALESCE($6, author),
                category = COALESCE($7, category),
                is_published = COALESCE($8, is_published),
                published_at = COALESCE($9, published_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.image_path)
            .bind(&input.author)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("UPDATE blog_posts SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(image_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("DELETE FROM blog_posts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any post already references an image with this file name.
    pub async fn image_exists<'e>(
        executor: impl PgExecutor<'e>,
        file_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM blog_posts WHERE right(image_path, length($1)) = $1)")
                .bind(file_name)
                .fetch_one(executor)
                .await?;
        Ok(row.0)
    }
}
