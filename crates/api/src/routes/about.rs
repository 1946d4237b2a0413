//! Route definitions for the `/about` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET    /            -> list_about
/// POST   /            -> create_about (multipart)
/// GET    /{id}        -> get_about
/// PUT    /{id}        -> update_about
/// DELETE /{id}        -> delete_about
/// PUT    /{id}/image  -> update_about_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(about::list_about).post(about::create_about))
        .route(
            "/{id}",
            get(about::get_about).put(about::update_about).delete(about::delete_about),
        )
        .route("/{id}/image", put(about::update_about_image))
}
