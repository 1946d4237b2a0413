//! Superuser gate for every content mutation.
//!
//! The token alone is not trusted: the account is reloaded so a deleted,
//! deactivated or demoted user loses access immediately.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use geoline_core::error::CoreError;
use geoline_db::models::user::User;
use geoline_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an active superuser. Rejects with 401 when the account no longer
/// exists, 400 when it is inactive and 403 when it is not a superuser.
///
/// ```ignore
/// async fn admin_only(RequireSuperuser(user): RequireSuperuser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "superuser request");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSuperuser(pub User);

impl FromRequestParts<AppState> for RequireSuperuser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let user = UserRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Could not validate credentials".into(),
                ))
            })?;

        if !user.is_active {
            return Err(AppError::BadRequest("Inactive user".into()));
        }
        if !user.is_superuser {
            return Err(AppError::Core(CoreError::Forbidden(
                "The user doesn't have enough privileges".into(),
            )));
        }
        Ok(RequireSuperuser(user))
    }
}
