//! Role names embedded in access-token claims.
//!
//! The CMS has a single privileged role; every other account is a plain user
//! with read access only.

pub const ROLE_SUPERUSER: &str = "superuser";
pub const ROLE_USER: &str = "user";

/// Role name for a user row's `is_superuser` flag.
pub fn role_for(is_superuser: bool) -> &'static str {
    if is_superuser {
        ROLE_SUPERUSER
    } else {
        ROLE_USER
    }
}
