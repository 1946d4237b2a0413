//! Handlers for the `/carousel` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::carousel::{CarouselSlide, CreateCarouselSlide, UpdateCarouselSlide};
use geoline_db::repositories::CarouselRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::ListParams;
use crate::state::AppState;

/// Upload subdirectory for slide images.
const SUBDIR: &str = "carousel";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CarouselSlide",
        id,
    })
}

/// GET /api/carousel
pub async fn list_slides(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<CarouselSlide>>> {
    let (limit, offset) = params.page();
    let slides = CarouselRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(slides))
}

/// GET /api/carousel/{id}
pub async fn get_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarouselSlide>> {
    let slide = CarouselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(slide))
}

/// POST /api/carousel
///
/// Multipart form: `title`, `subtitle`, `button_text`, `button_link`,
/// `order`, `is_active` and a required `image`.
pub async fn create_slide(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<CarouselSlide>)> {
    let mut form = FormData::read(multipart).await?;
    let mut input = CreateCarouselSlide {
        title: form.required_text("title")?,
        subtitle: form.text("subtitle"),
        image_path: String::new(),
        button_text: form.text("button_text"),
        button_link: form.text("button_link"),
        sort_order: form.parse("order")?,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;
    let image = form.required_file("image")?;

    input.image_path = state.uploads.save_image(image, SUBDIR).await?;
    let slide = discard_on_error(
        &state.uploads,
        &input.image_path,
        CarouselRepo::create(&state.pool, &input).await,
    )
    .await?;

    tracing::info!(slide_id = slide.id, user_id = user.id, "Carousel slide created");

    Ok((StatusCode::CREATED, Json(slide)))
}

/// PUT /api/carousel/{id}
pub async fn update_slide(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarouselSlide>,
) -> AppResult<Json<CarouselSlide>> {
    validate(&input)?;
    let slide = CarouselRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(slide_id = id, user_id = user.id, "Carousel slide updated");

    Ok(Json(slide))
}

/// PUT /api/carousel/{id}/image
///
/// Stores the new image, points the row at it, then removes the old file.
pub async fn update_slide_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<CarouselSlide>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = CarouselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        CarouselRepo::set_image_path(&state.pool, id, &stored).await,
    )
    .await?;
    let Some(slide) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    state.uploads.delete(&existing.image_path).await;

    tracing::info!(slide_id = id, user_id = user.id, path = %stored, "Carousel image replaced");

    Ok(Json(slide))
}

/// DELETE /api/carousel/{id}
pub async fn delete_slide(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let slide = CarouselRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.uploads.delete(&slide.image_path).await;

    tracing::info!(slide_id = id, user_id = user.id, "Carousel slide deleted");

    Ok(StatusCode::NO_CONTENT)
}
