//! Route definitions for the `/portfolio` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /            -> list_projects
/// POST   /            -> create_project (multipart)
/// GET    /{id}        -> get_project
/// PUT    /{id}        -> update_project
/// DELETE /{id}        -> delete_project
/// PUT    /{id}/image  -> update_project_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list_projects).post(portfolio::create_project))
        .route(
            "/{id}",
            get(portfolio::get_project).put(portfolio::update_project).delete(portfolio::delete_project),
        )
        .route("/{id}/image", put(portfolio::update_project_image))
}
