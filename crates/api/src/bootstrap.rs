//! First-start provisioning.

use geoline_db::models::user::{CreateUser, User};
use geoline_db::repositories::UserRepo;
use geoline_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminConfig;
use crate::error::{AppError, AppResult};

/// Create the configured superuser unless an account with that username
/// already exists. Returns the new user, or `None` when nothing was done.
pub async fn seed_admin(pool: &DbPool, admin: &AdminConfig) -> AppResult<Option<User>> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        return Ok(None);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            is_superuser: true,
        },
    )
    .await?;

    Ok(Some(user))
}
