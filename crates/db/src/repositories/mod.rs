//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Inserts take any executor so
//! the static-image import can run them inside a transaction.

pub mod about_repo;
pub mod blog_repo;
pub mod carousel_repo;
pub mod contact_info_repo;
pub mod contact_submission_repo;
pub mod faq_repo;
pub mod license_repo;
pub mod partner_repo;
pub mod portfolio_repo;
pub mod service_repo;
pub mod statistic_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use blog_repo::BlogRepo;
pub use carousel_repo::CarouselRepo;
pub use contact_info_repo::ContactInfoRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use faq_repo::FaqRepo;
pub use license_repo::LicenseRepo;
pub use partner_repo::PartnerRepo;
pub use portfolio_repo::PortfolioRepo;
pub use service_repo::ServiceRepo;
pub use statistic_repo::StatisticRepo;
pub use user_repo::UserRepo;

/// `WHERE` clause for the public `active_only` list filter.
pub(crate) fn active_filter(active_only: bool) -> &'static str {
    if active_only {
        "WHERE is_active = true"
    } else {
        ""
    }
}
