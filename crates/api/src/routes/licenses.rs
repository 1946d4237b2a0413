//! Route definitions for the `/licenses` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::license;
use crate::state::AppState;

/// Routes mounted at `/licenses`.
///
/// ```text
/// GET    /            -> list_licenses
/// POST   /            -> create_license (multipart)
/// GET    /{id}        -> get_license
/// PUT    /{id}        -> update_license
/// DELETE /{id}        -> delete_license
/// PUT    /{id}/image  -> update_license_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(license::list_licenses).post(license::create_license))
        .route(
            "/{id}",
            get(license::get_license).put(license::update_license).delete(license::delete_license),
        )
        .route("/{id}/image", put(license::update_license_image))
}
