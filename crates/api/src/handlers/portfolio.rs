//! Handlers for the `/portfolio` resource.
//!
//! Projects are grouped on the site by [`ProjectStatus`]; the list endpoint
//! accepts a `status_filter` alongside the usual paging parameters.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::{validate, ProjectStatus};
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::portfolio::{
    CreatePortfolioProject, PortfolioProject, UpdatePortfolioProject,
};
use geoline_db::repositories::PortfolioRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::PortfolioListParams;
use crate::state::AppState;

const SUBDIR: &str = "portfolio";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PortfolioProject",
        id,
    })
}

/// GET /api/portfolio
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<PortfolioListParams>,
) -> AppResult<Json<Vec<PortfolioProject>>> {
    let (limit, offset) = params.page();
    let projects = PortfolioRepo::list(
        &state.pool,
        params.active_only,
        params.status_filter,
        limit,
        offset,
    )
    .await?;
    Ok(Json(projects))
}

/// GET /api/portfolio/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PortfolioProject>> {
    let project = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// POST /api/portfolio
///
/// Multipart form: `title`, `description`, `status`, `order`, `is_active`
/// and a required `image`. `status` defaults to `future`.
pub async fn create_project(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<PortfolioProject>)> {
    let mut form = FormData::read(multipart).await?;
    let status = match form.text("status") {
        Some(raw) => Some(raw.trim().parse::<ProjectStatus>()?),
        None => None,
    };
    let mut input = CreatePortfolioProject {
        title: form.required_text("title")?,
        description: form.text("description"),
        image_path: String::new(),
        status,
        sort_order: form.parse("order")?,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;
    let image = form.required_file("image")?;

    input.image_path = state.uploads.save_image(image, SUBDIR).await?;
    let project = discard_on_error(
        &state.uploads,
        &input.image_path,
        PortfolioRepo::create(&state.pool, &input).await,
    )
    .await?;

    tracing::info!(
        project_id = project.id,
        status = %project.status,
        user_id = user.id,
        "Portfolio project created",
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/portfolio/{id}
pub async fn update_project(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioProject>,
) -> AppResult<Json<PortfolioProject>> {
    validate(&input)?;
    let project = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, user_id = user.id, "Portfolio project updated");

    Ok(Json(project))
}

/// PUT /api/portfolio/{id}/image
pub async fn update_project_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<PortfolioProject>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        PortfolioRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(project) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    state.uploads.delete(&existing.image_path).await;

    tracing::info!(project_id = id, user_id = user.id, path = %stored, "Portfolio image replaced");

    Ok(Json(project))
}

/// DELETE /api/portfolio/{id}
pub async fn delete_project(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = PortfolioRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.uploads.delete(&project.image_path).await;

    tracing::info!(project_id = id, user_id = user.id, "Portfolio project deleted");

    Ok(StatusCode::NO_CONTENT)
}
