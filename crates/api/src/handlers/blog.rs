//! Handlers for the `/blog` resource.
//!
//! Blog posts carry a `published_at` timestamp that is stamped once: on
//! create when the post starts out published, otherwise on the first update
//! that publishes it. Unpublishing keeps the original timestamp.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};
use geoline_db::repositories::BlogRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::BlogListParams;
use crate::state::AppState;

const SUBDIR: &str = "blog";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BlogPost",
        id,
    })
}

/// Whether an update publishes a post for the first time.
fn first_publication(existing: &BlogPost, input: &UpdateBlogPost) -> bool {
    input.is_published == Some(true) && !existing.is_published && existing.published_at.is_none()
}

/// GET /api/blog
///
/// Newest first. `published_only=true` hides drafts.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let (limit, offset) = params.page();
    let posts = BlogRepo::list(&state.pool, params.published_only, limit, offset).await?;
    Ok(Json(posts))
}

/// GET /api/blog/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// POST /api/blog
///
/// Multipart form: `title`, `excerpt`, `content`, `author`, `category`,
/// `is_published` and an optional `image`.
pub async fn create_post(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let mut form = FormData::read(multipart).await?;
    let is_published = form.bool("is_published")?;
    let mut input = CreateBlogPost {
        title: form.required_text("title")?,
        excerpt: form.text("excerpt"),
        content: form.text("content"),
        image_path: None,
        author: form.text("author"),
        category: form.text("category"),
        is_published,
        published_at: is_published.filter(|p| *p).map(|_| Utc::now()),
    };
    validate(&input)?;

    let post = match form.take_file("image") {
        Some(image) => {
            let stored = state.uploads.save_image(image, SUBDIR).await?;
            input.image_path = Some(stored.clone());
            discard_on_error(&state.uploads, &stored, BlogRepo::create(&state.pool, &input).await)
                .await?
        }
        None => BlogRepo::create(&state.pool, &input).await?,
    };

    tracing::info!(
        post_id = post.id,
        published = post.is_published,
        user_id = user.id,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/blog/{id}
pub async fn update_post(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    validate(&input)?;
    let existing = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if first_publication(&existing, &input) {
        input.published_at = Some(Utc::now());
    }

    let post = BlogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(post_id = id, user_id = user.id, "Blog post updated");

    Ok(Json(post))
}

/// PUT /api/blog/{id}/image
pub async fn update_post_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<BlogPost>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        BlogRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(post) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    if let Some(old) = existing.image_path.as_deref() {
        state.uploads.delete(old).await;
    }

    tracing::info!(post_id = id, user_id = user.id, "Blog image replaced");

    Ok(Json(post))
}

/// DELETE /api/blog/{id}
pub async fn delete_post(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let post = BlogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(path) = post.image_path.as_deref() {
        state.uploads.delete(path).await;
    }

    tracing::info!(post_id = id, user_id = user.id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}
