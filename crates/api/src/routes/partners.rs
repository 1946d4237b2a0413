//! Route definitions for the `/partners` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::partner;
use crate::state::AppState;

/// Routes mounted at `/partners`.
///
/// ```text
/// GET    /            -> list_partners
/// POST   /            -> create_partner (multipart)
/// GET    /{id}        -> get_partner
/// PUT    /{id}        -> update_partner
/// DELETE /{id}        -> delete_partner
/// PUT    /{id}/image  -> update_partner_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(partner::list_partners).post(partner::create_partner))
        .route(
            "/{id}",
            get(partner::get_partner).put(partner::update_partner).delete(partner::delete_partner),
        )
        .route("/{id}/image", put(partner::update_partner_image))
}
