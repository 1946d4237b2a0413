//! Route definitions for the `/services` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /               -> list_services
/// POST   /               -> create_service (multipart)
/// POST   /upload-images  -> upload_images (multipart)
/// GET    /{id}           -> get_service
/// PUT    /{id}           -> update_service
/// DELETE /{id}           -> delete_service
/// PUT    /{id}/image     -> update_service_image (multipart)
/// PUT    /{id}/images    -> update_service_images (multipart)
/// PUT    /{id}/video     -> update_service_video (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(service::list_services).post(service::create_service),
        )
        .route("/upload-images", post(service::upload_images))
        .route(
            "/{id}",
            get(service::get_service)
                .put(service::update_service)
                .delete(service::delete_service),
        )
        .route("/{id}/image", put(service::update_service_image))
        .route("/{id}/images", put(service::update_service_images))
        .route("/{id}/video", put(service::update_service_video))
}
