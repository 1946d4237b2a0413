//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login       -> login (form or JSON)
/// POST /login/json  -> login_json
/// GET  /me          -> me (superuser)
/// POST /users       -> create_user (superuser)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/login/json", post(auth::login_json))
        .route("/me", get(auth::me))
        .route("/users", post(auth::create_user))
}
