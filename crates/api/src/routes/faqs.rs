//! Route definitions for the `/faqs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET    /      -> list_faqs
/// POST   /      -> create_faq
/// GET    /{id}  -> get_faq
/// PUT    /{id}  -> update_faq
/// DELETE /{id}  -> delete_faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list_faqs).post(faq::create_faq))
        .route(
            "/{id}",
            get(faq::get_faq).put(faq::update_faq).delete(faq::delete_faq),
        )
}
