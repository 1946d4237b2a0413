//! Handlers for the `/about` resource.
//!
//! The site shows a single about block, so the list endpoint returns at most
//! one record. The image is optional.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::about::{AboutContent, CreateAboutContent, UpdateAboutContent};
use geoline_db::repositories::AboutRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::ListParams;
use crate::state::AppState;

const SUBDIR: &str = "about";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "AboutContent",
        id,
    })
}

/// GET /api/about
///
/// Only `active_only` is honoured; paging parameters are ignored.
pub async fn list_about(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<AboutContent>>> {
    let content = AboutRepo::list(&state.pool, params.active_only, 1, 0).await?;
    Ok(Json(content))
}

/// GET /api/about/{id}
pub async fn get_about(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AboutContent>> {
    let content = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(content))
}

/// POST /api/about
///
/// Multipart form: `title`, `subtitle`, `description`, `is_active` and an
/// optional `image`.
pub async fn create_about(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<AboutContent>)> {
    let mut form = FormData::read(multipart).await?;
    let mut input = CreateAboutContent {
        title: form.required_text("title")?,
        subtitle: form.text("subtitle"),
        description: form.text("description"),
        image_path: None,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;

    let content = match form.take_file("image") {
        Some(image) => {
            let stored = state.uploads.save_image(image, SUBDIR).await?;
            input.image_path = Some(stored.clone());
            discard_on_error(
                &state.uploads,
                &stored,
                AboutRepo::create(&state.pool, &input).await,
            )
            .await?
        }
        None => AboutRepo::create(&state.pool, &input).await?,
    };

    tracing::info!(about_id = content.id, user_id = user.id, "About content created");

    Ok((StatusCode::CREATED, Json(content)))
}

/// PUT /api/about/{id}
pub async fn update_about(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAboutContent>,
) -> AppResult<Json<AboutContent>> {
    validate(&input)?;
    let content = AboutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(about_id = id, user_id = user.id, "About content updated");

    Ok(Json(content))
}

/// PUT /api/about/{id}/image
pub async fn update_about_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<AboutContent>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        AboutRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(content) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    if let Some(old) = existing.image_path.as_deref() {
        state.uploads.delete(old).await;
    }

    tracing::info!(about_id = id, user_id = user.id, "About image replaced");

    Ok(Json(content))
}

/// DELETE /api/about/{id}
pub async fn delete_about(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let content = AboutRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(path) = content.image_path.as_deref() {
        state.uploads.delete(path).await;
    }

    tracing::info!(about_id = id, user_id = user.id, "About content deleted");

    Ok(StatusCode::NO_CONTENT)
}
