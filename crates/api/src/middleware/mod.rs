//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireSuperuser`] -- Requires an active superuser account.

pub mod auth;
pub mod rbac;
