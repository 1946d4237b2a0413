//! Handlers for the `/contact` resource.
//!
//! Two record kinds live here: the contact details shown on the site
//! (`/contact/info`, managed like any other content) and the messages
//! visitors send through the contact form (`/contact/submit` is public,
//! everything under `/contact/submissions` is superuser-only).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::contact::{
    ContactInfo, ContactSubmission, CreateContactInfo, CreateContactSubmission, UpdateContactInfo,
};
use geoline_db::repositories::{ContactInfoRepo, ContactSubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::query::{ListParams, SubmissionListParams};
use crate::state::AppState;

fn info_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactInfo",
        id,
    })
}

fn submission_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactSubmission",
        id,
    })
}

// ---------------------------------------------------------------------------
// Contact info
// ---------------------------------------------------------------------------

/// GET /api/contact/info
pub async fn list_info(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ContactInfo>>> {
    let (limit, offset) = params.page();
    let info = ContactInfoRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(info))
}

/// GET /api/contact/info/{id}
pub async fn get_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactInfo>> {
    let info = ContactInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| info_not_found(id))?;
    Ok(Json(info))
}

/// POST /api/contact/info
pub async fn create_info(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateContactInfo>,
) -> AppResult<(StatusCode, Json<ContactInfo>)> {
    validate(&input)?;
    let info = ContactInfoRepo::create(&state.pool, &input).await?;

    tracing::info!(info_id = info.id, user_id = user.id, "Contact info created");

    Ok((StatusCode::CREATED, Json(info)))
}

/// PUT /api/contact/info/{id}
pub async fn update_info(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactInfo>,
) -> AppResult<Json<ContactInfo>> {
    validate(&input)?;
    let info = ContactInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| info_not_found(id))?;

    tracing::info!(info_id = id, user_id = user.id, "Contact info updated");

    Ok(Json(info))
}

/// DELETE /api/contact/info/{id}
pub async fn delete_info(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ContactInfoRepo::delete(&state.pool, id).await? {
        return Err(info_not_found(id));
    }

    tracing::info!(info_id = id, user_id = user.id, "Contact info deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Contact form submissions
// ---------------------------------------------------------------------------

/// POST /api/contact/submit
///
/// Public. Stores a visitor message as unread.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateContactSubmission>,
) -> AppResult<(StatusCode, Json<ContactSubmission>)> {
    validate(&input)?;
    let submission = ContactSubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(submission_id = submission.id, "Contact form submitted");

    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/contact/submissions
///
/// Newest first; `unread_only=true` hides messages already read.
pub async fn list_submissions(
    RequireSuperuser(_user): RequireSuperuser,
    State(state): State<AppState>,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<Json<Vec<ContactSubmission>>> {
    let (limit, offset) = params.page();
    let submissions =
        ContactSubmissionRepo::list(&state.pool, params.unread_only, limit, offset).await?;
    Ok(Json(submissions))
}

/// GET /api/contact/submissions/{id}
pub async fn get_submission(
    RequireSuperuser(_user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactSubmission>> {
    let submission = ContactSubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| submission_not_found(id))?;
    Ok(Json(submission))
}

/// PUT /api/contact/submissions/{id}/read
pub async fn mark_submission_read(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactSubmission>> {
    let submission = ContactSubmissionRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| submission_not_found(id))?;

    tracing::info!(submission_id = id, user_id = user.id, "Contact submission marked read");

    Ok(Json(submission))
}

/// DELETE /api/contact/submissions/{id}
pub async fn delete_submission(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ContactSubmissionRepo::delete(&state.pool, id).await? {
        return Err(submission_not_found(id));
    }

    tracing::info!(submission_id = id, user_id = user.id, "Contact submission deleted");

    Ok(StatusCode::NO_CONTENT)
}
