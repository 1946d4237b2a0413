//! Request handlers, one submodule per resource.
//!
//! Reads are public. Every mutation takes a
//! [`RequireSuperuser`](crate::middleware::rbac::RequireSuperuser) extractor.
//! Handlers delegate to the matching repository in `geoline_db`, keep files
//! in the [`UploadStore`] in step with the rows that reference them, and map
//! errors via [`AppError`].

pub mod about;
pub mod auth;
pub mod blog;
pub mod carousel;
pub mod contact;
pub mod faq;
pub mod license;
pub mod partner;
pub mod portfolio;
pub mod service;
pub mod statistic;

use geoline_core::upload::UploadStore;

use crate::error::{AppError, AppResult};

/// Pass a repository result through, removing the freshly stored file when
/// the row could not be written so it does not linger unreferenced.
pub(crate) async fn discard_on_error<T>(
    uploads: &UploadStore,
    stored: &str,
    result: Result<T, sqlx::Error>,
) -> AppResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            uploads.delete(stored).await;
            Err(AppError::Database(e))
        }
    }
}
