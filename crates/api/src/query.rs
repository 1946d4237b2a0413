//! Shared query parameter types for API handlers.
//!
//! Every public list endpoint accepts `skip` (or `offset`) and `limit`;
//! values are clamped here before reaching the repositories.

use geoline_core::content::ProjectStatus;
use geoline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::Deserialize;

/// Clamp raw `skip` / `limit` values into `(limit, offset)`.
fn page(skip: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    (
        clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        clamp_offset(skip),
    )
}

/// `?skip=&limit=&active_only=` for ordered content lists.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(alias = "offset")]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub active_only: bool,
}

impl ListParams {
    pub fn page(&self) -> (i64, i64) {
        page(self.skip, self.limit)
    }
}

/// Portfolio list parameters; adds `status_filter`.
#[derive(Debug, Default, Deserialize)]
pub struct PortfolioListParams {
    #[serde(alias = "offset")]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub active_only: bool,
    pub status_filter: Option<ProjectStatus>,
}

impl PortfolioListParams {
    pub fn page(&self) -> (i64, i64) {
        page(self.skip, self.limit)
    }
}

/// Blog list parameters; `published_only` replaces `active_only`.
#[derive(Debug, Default, Deserialize)]
pub struct BlogListParams {
    #[serde(alias = "offset")]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub published_only: bool,
}

impl BlogListParams {
    pub fn page(&self) -> (i64, i64) {
        page(self.skip, self.limit)
    }
}

/// Contact submission list parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionListParams {
    #[serde(alias = "offset")]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub unread_only: bool,
}

impl SubmissionListParams {
    pub fn page(&self) -> (i64, i64) {
        page(self.skip, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(uri: &str) -> T {
        let uri: Uri = uri.parse().unwrap();
        Query::<T>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn defaults_apply_without_query() {
        let params: ListParams = parse("/api/faqs");
        assert_eq!(params.page(), (100, 0));
        assert!(!params.active_only);
    }

    #[test]
    fn offset_is_an_alias_for_skip() {
        let params: ListParams = parse("/api/faqs?offset=20&limit=5");
        assert_eq!(params.page(), (5, 20));
    }

    #[test]
    fn limits_are_clamped() {
        let params: ListParams = parse("/api/faqs?skip=-4&limit=50000&active_only=true");
        assert_eq!(params.page(), (1000, 0));
        assert!(params.active_only);
    }

    #[test]
    fn portfolio_status_filter_parses() {
        let params: PortfolioListParams = parse("/api/portfolio?status_filter=in_progress");
        assert_eq!(params.status_filter, Some(ProjectStatus::InProgress));
    }
}
