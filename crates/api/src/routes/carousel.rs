//! Route definitions for the `/carousel` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

/// Routes mounted at `/carousel`.
///
/// ```text
/// GET    /            -> list_slides
/// POST   /            -> create_slide (multipart)
/// GET    /{id}        -> get_slide
/// PUT    /{id}        -> update_slide
/// DELETE /{id}        -> delete_slide
/// PUT    /{id}/image  -> update_slide_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::list_slides).post(carousel::create_slide))
        .route(
            "/{id}",
            get(carousel::get_slide).put(carousel::update_slide).delete(carousel::delete_slide),
        )
        .route("/{id}/image", put(carousel::update_slide_image))
}
