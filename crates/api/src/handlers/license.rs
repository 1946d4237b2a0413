//! Handlers for the `/licenses` resource (certificates shown on the site).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::license::{CreateLicense, License, UpdateLicense};
use geoline_db::repositories::LicenseRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::ListParams;
use crate::state::AppState;

const SUBDIR: &str = "licenses";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "License",
        id,
    })
}

/// GET /api/licenses
pub async fn list_licenses(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<License>>> {
    let (limit, offset) = params.page();
    let licenses = LicenseRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(licenses))
}

/// GET /api/licenses/{id}
pub async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<License>> {
    let license = LicenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(license))
}

/// POST /api/licenses
///
/// Multipart form: `title`, `description`, `order`, `is_active` and a
/// required `image`.
pub async fn create_license(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<License>)> {
    let mut form = FormData::read(multipart).await?;
    let mut input = CreateLicense {
        title: form.required_text("title")?,
        image_path: String::new(),
        description: form.text("description"),
        sort_order: form.parse("order")?,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;
    let image = form.required_file("image")?;

    input.image_path = state.uploads.save_image(image, SUBDIR).await?;
    let license = discard_on_error(
        &state.uploads,
        &input.image_path,
        LicenseRepo::create(&state.pool, &input).await,
    )
    .await?;

    tracing::info!(license_id = license.id, user_id = user.id, "License created");

    Ok((StatusCode::CREATED, Json(license)))
}

/// PUT /api/licenses/{id}
pub async fn update_license(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLicense>,
) -> AppResult<Json<License>> {
    validate(&input)?;
    let license = LicenseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(license_id = id, user_id = user.id, "License updated");

    Ok(Json(license))
}

/// PUT /api/licenses/{id}/image
pub async fn update_license_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<License>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = LicenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        LicenseRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(license) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    state.uploads.delete(&existing.image_path).await;

    tracing::info!(license_id = id, user_id = user.id, "License image replaced");

    Ok(Json(license))
}

/// DELETE /api/licenses/{id}
pub async fn delete_license(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let license = LicenseRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.uploads.delete(&license.image_path).await;

    tracing::info!(license_id = id, user_id = user.id, "License deleted");

    Ok(StatusCode::NO_CONTENT)
}
