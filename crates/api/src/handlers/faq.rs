//! Handlers for the `/faqs` resource. Plain JSON CRUD, no files.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use geoline_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::query::ListParams;
use crate::state::AppState;

pub async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Faq>>> {
    let (limit, offset) = params.page();
    let faqs = FaqRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(faqs))
}

pub async fn get_faq(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

pub async fn create_faq(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateFaq>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    validate(&input)?;
    let faq = FaqRepo::create(&state.pool, &input).await?;

    tracing::info!(faq_id = faq.id, user_id = user.id, "FAQ created");

    Ok((StatusCode::CREATED, Json(faq)))
}

pub async fn update_faq(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<Json<Faq>> {
    validate(&input)?;
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;

    tracing::info!(faq_id = id, user_id = user.id, "FAQ updated");

    Ok(Json(faq))
}

pub async fn delete_faq(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }));
    }

    tracing::info!(faq_id = id, user_id = user.id, "FAQ deleted");

    Ok(StatusCode::NO_CONTENT)
}
