//! Handlers for the `/services` resource.
//!
//! Services carry more media than the other entities: a primary
//! `image_path`, an `images` gallery (JSON array text) and a `video_url`
//! that is either an uploaded file or an external embed URL. When a service
//! has no image at all, a frame of its uploaded video is used, falling back
//! to the shared placeholder.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::media::{
    first_image_path, local_video, parse_image_list, prepend_image, replace_image,
    single_image_list, PLACEHOLDER_IMAGE,
};
use geoline_core::types::DbId;
use geoline_db::models::service::{CreateService, Service, UpdateService};
use geoline_db::repositories::ServiceRepo;

use super::discard_on_error;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::multipart::FormData;
use crate::query::ListParams;
use crate::state::AppState;

/// Upload subdirectory for service images and thumbnails.
const SUBDIR: &str = "services";

/// Upload subdirectory for service videos.
const VIDEO_SUBDIR: &str = "services/videos";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Service",
        id,
    })
}

/// Gallery sent as `images_json` on create, with its first path.
///
/// Only a non-empty JSON array is used; anything else is ignored.
fn gallery_from_form(raw: Option<&str>) -> Option<(String, Option<String>)> {
    let raw = raw?;
    match parse_image_list(raw) {
        Ok(items) if !items.is_empty() => Some((raw.to_string(), first_image_path(raw))),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/services
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Service>>> {
    let (limit, offset) = params.page();
    let services = ServiceRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(services))
}

/// GET /api/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(service))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/services
///
/// Multipart form: `title`, `description`, `video_url`, `order`,
/// `is_active`, `image`, `images_json`, `video_file`.
///
/// An uploaded `video_file` takes precedence over `video_url`. The primary
/// image is the first `images_json` entry, else the uploaded `image`, else a
/// thumbnail of the uploaded video, else the placeholder.
pub async fn create_service(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Service>)> {
    let mut form = FormData::read(multipart).await?;
    let mut input = CreateService {
        title: form.required_text("title")?,
        description: form.text("description"),
        image_path: String::new(),
        images: None,
        video_url: form.text("video_url").map(|url| url.trim().to_string()),
        sort_order: form.parse("order")?,
        is_active: form.bool("is_active")?,
    };
    validate(&input)?;

    let mut stored = Vec::new();
    let created = match attach_media(&state, &mut form, &mut input, &mut stored).await {
        Ok(()) => ServiceRepo::create(&state.pool, &input)
            .await
            .map_err(AppError::from),
        Err(e) => Err(e),
    };
    let service = match created {
        Ok(service) => service,
        Err(e) => {
            for path in &stored {
                state.uploads.delete(path).await;
            }
            return Err(e);
        }
    };

    tracing::info!(
        service_id = service.id,
        image = %service.image_path,
        has_video = service.video_url.is_some(),
        user_id = user.id,
        "Service created",
    );

    Ok((StatusCode::CREATED, Json(service)))
}

/// Store the uploaded files of a create form and fill in the media fields
/// of `input`. Every file written is recorded in `stored`.
async fn attach_media(
    state: &AppState,
    form: &mut FormData,
    input: &mut CreateService,
    stored: &mut Vec<String>,
) -> AppResult<()> {
    if let Some(video) = form.take_file("video_file") {
        let path = state.uploads.save_video(video, VIDEO_SUBDIR).await?;
        stored.push(path.clone());
        input.video_url = Some(path);
    }

    let mut image_path = None;
    if let Some((images, first)) = gallery_from_form(form.raw("images_json")) {
        input.images = Some(images);
        image_path = first;
    }

    if let Some(image) = form.take_file("image") {
        let uploaded = state.uploads.save_image(image, SUBDIR).await?;
        stored.push(uploaded.clone());
        input.images = Some(prepend_image(input.images.as_deref(), &uploaded));
        image_path.get_or_insert(uploaded);
    }

    input.image_path = match image_path {
        Some(path) => path,
        None => match local_video(input.video_url.as_deref()).map(str::to_string) {
            Some(video) => {
                let thumbnail = state.uploads.thumbnail_or_placeholder(&video, SUBDIR).await;
                if thumbnail != PLACEHOLDER_IMAGE {
                    stored.push(thumbnail.clone());
                    if input.images.is_none() {
                        input.images = Some(single_image_list(&thumbnail));
                    }
                }
                thumbnail
            }
            None => PLACEHOLDER_IMAGE.to_string(),
        },
    };

    Ok(())
}

/// POST /api/services/upload-images
///
/// Stores every file sent as `images` and returns the stored paths, for the
/// admin panel to assemble an `images_json` gallery. Files that fail to
/// store are skipped.
pub async fn upload_images(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<Vec<String>>> {
    let mut form = FormData::read(multipart).await?;
    let files = form.take_files("images");
    if files.is_empty() {
        return Err(AppError::BadRequest("Missing required 'images' file".into()));
    }

    let mut paths = Vec::with_capacity(files.len());
    for file in files {
        let name = file.file_name.clone().unwrap_or_default();
        match state.uploads.save_image(file, SUBDIR).await {
            Ok(path) => paths.push(path),
            Err(e) => tracing::warn!(file = %name, error = %e, "Skipping service image"),
        }
    }

    tracing::info!(count = paths.len(), user_id = user.id, "Service images uploaded");

    Ok(Json(paths))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /api/services/{id}
pub async fn update_service(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    validate(&input)?;
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(service_id = id, user_id = user.id, "Service updated");

    Ok(Json(service))
}

/// PUT /api/services/{id}/image
///
/// Gallery entries naming the old image are pointed at the new one.
pub async fn update_service_image(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Service>> {
    let mut form = FormData::read(multipart).await?;
    let image = form.required_file("image")?;
    let existing = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let stored = state.uploads.save_image(image, SUBDIR).await?;
    let gallery = replace_image(existing.images.as_deref(), &existing.image_path, &stored);
    let updated = discard_on_error(
        &state.uploads,
        &stored,
        ServiceRepo::set_image_path(&state.pool, id, &stored, gallery.as_deref()).await,
    )
    .await?;
    let Some(service) = updated else {
        state.uploads.delete(&stored).await;
        return Err(not_found(id));
    };
    // The placeholder is shared and survives this.
    state.uploads.delete(&existing.image_path).await;

    tracing::info!(service_id = id, user_id = user.id, path = %stored, "Service image replaced");

    Ok(Json(service))
}

/// PUT /api/services/{id}/images
///
/// Form field `images_json` must be a JSON array. The first entry becomes
/// the primary image only when the service has none.
pub async fn update_service_images(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Service>> {
    let form = FormData::read(multipart).await?;
    let raw = form.required_text("images_json")?;
    parse_image_list(&raw)?;
    let first = first_image_path(&raw);

    let service = ServiceRepo::set_images(&state.pool, id, &raw, first.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(service_id = id, user_id = user.id, "Service gallery updated");

    Ok(Json(service))
}

/// PUT /api/services/{id}/video
///
/// Form fields `video_file` or `video_url`. The previous local video is
/// always removed. An uploaded file replaces the placeholder image with a
/// thumbnail when it can; a URL is stored trimmed; anything else clears the
/// video.
pub async fn update_service_video(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Service>> {
    let mut form = FormData::read(multipart).await?;
    let existing = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut stored = Vec::new();
    let mut thumbnail = None;
    let video_url = match form.take_file("video_file") {
        Some(video) => {
            let path = state.uploads.save_video(video, VIDEO_SUBDIR).await?;
            stored.push(path.clone());
            if existing.image_path == PLACEHOLDER_IMAGE {
                match state.uploads.extract_video_thumbnail(&path, SUBDIR).await {
                    Ok(thumb) => {
                        stored.push(thumb.clone());
                        thumbnail = Some(thumb);
                    }
                    Err(e) => {
                        tracing::warn!(service_id = id, error = %e, "Keeping placeholder, thumbnail failed")
                    }
                }
            }
            Some(path)
        }
        None => {
            let url = form.text("video_url").map(|url| url.trim().to_string());
            validate(&UpdateService {
                video_url: url.clone(),
                ..Default::default()
            })?;
            url
        }
    };

    let updated = match ServiceRepo::set_video(
        &state.pool,
        id,
        video_url.as_deref(),
        thumbnail.as_deref(),
    )
    .await
    {
        Ok(Some(service)) => Ok(service),
        Ok(None) => Err(not_found(id)),
        Err(e) => Err(AppError::Database(e)),
    };
    let service = match updated {
        Ok(service) => service,
        Err(e) => {
            for path in &stored {
                state.uploads.delete(path).await;
            }
            return Err(e);
        }
    };

    if let Some(old) = local_video(existing.video_url.as_deref()) {
        if service.video_url.as_deref() != Some(old) {
            state.uploads.delete(old).await;
        }
    }

    tracing::info!(
        service_id = id,
        has_video = service.video_url.is_some(),
        user_id = user.id,
        "Service video updated",
    );

    Ok(Json(service))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/services/{id}
///
/// Removes the row, its primary image and any uploaded video.
pub async fn delete_service(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let service = ServiceRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.uploads.delete(&service.image_path).await;
    if let Some(video) = local_video(service.video_url.as_deref()) {
        state.uploads.delete(video).await;
    }

    tracing::info!(service_id = id, user_id = user.id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
