//! Handlers for the `/partners` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::partner::{CreatePartner, Partner, UpdatePartner};
use geoline_db::repositories::PartnerRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::ListParams;
use crate::state::AppState;

const SUBDIR: &str = "partners";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Partner",
        id,
    })
}

pub async fn list_partners(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Partner>>> {
    let (limit, offset) = params.page();
    let partners = PartnerRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(partners))
}

pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Partner>> {
    let partner = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(partner))
}

/// Multipart form: `name`, `website_url`, `order`, `is_active`, `image`.
pub async fn create_partner(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Partner>)> {
    let mut form = FormData::read(multipart).await?;
    let mut input = CreatePartner {
        name: form.required_text("name")?,
        image_path: String::new(),
        website_url: form.text("website_url"),
        sort_order: form.parse("order")?,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;
    let image = form.required_file("image")?;

    input.image_path = state.uploads.save_image(image, SUBDIR).await?;
    let partner = discard_on_error(
        &state.uploads,
        &input.image_path,
        PartnerRepo::create(&state.pool, &input).await,
    )
    .await?;

    tracing::info!(partner_id = partner.id, user_id = user.id, "Partner created");

    Ok((StatusCode::CREATED, Json(partner)))
}

pub async fn update_partner(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePartner>,
) -> AppResult<Json<Partner>> {
    validate(&input)?;
    let partner = PartnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(partner_id = id, user_id = user.id, "Partner updated");

    Ok(Json(partner))
}

pub async fn update_partner_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Partner>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = PartnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        PartnerRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(partner) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    state.uploads.delete(&existing.image_path).await;

    tracing::info!(partner_id = id, user_id = user.id, "Partner logo replaced");

    Ok(Json(partner))
}

pub async fn delete_partner(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let partner = PartnerRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.uploads.delete(&partner.image_path).await;

    tracing::info!(partner_id = id, user_id = user.id, "Partner deleted");

    Ok(StatusCode::NO_CONTENT)
}
