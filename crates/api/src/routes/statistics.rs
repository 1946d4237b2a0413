//! Route definitions for the `/statistics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistic;
use crate::state::AppState;

/// Routes mounted at `/statistics`.
///
/// ```text
/// GET    /      -> list_statistics
/// POST   /      -> create_statistic
/// GET    /{id}  -> get_statistic
/// PUT    /{id}  -> update_statistic
/// DELETE /{id}  -> delete_statistic
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(statistic::list_statistics).post(statistic::create_statistic),
        )
        .route(
            "/{id}",
            get(statistic::get_statistic)
                .put(statistic::update_statistic)
                .delete(statistic::delete_statistic),
        )
}
