//! Route definitions for the `/contact` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /info                   -> list_info
/// POST   /info                   -> create_info
/// GET    /info/{id}              -> get_info
/// PUT    /info/{id}              -> update_info
/// DELETE /info/{id}              -> delete_info
/// POST   /submit                 -> submit (public)
/// GET    /submissions            -> list_submissions
/// GET    /submissions/{id}       -> get_submission
/// DELETE /submissions/{id}       -> delete_submission
/// PUT    /submissions/{id}/read  -> mark_submission_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(contact::list_info).post(contact::create_info))
        .route(
            "/info/{id}",
            get(contact::get_info)
                .put(contact::update_info)
                .delete(contact::delete_info),
        )
        .route("/submit", post(contact::submit))
        .route("/submissions", get(contact::list_submissions))
        .route(
            "/submissions/{id}",
            get(contact::get_submission).delete(contact::delete_submission),
        )
        .route("/submissions/{id}/read", put(contact::mark_submission_read))
}
