pub mod about;
pub mod auth;
pub mod blog;
pub mod carousel;
pub mod contact;
pub mod faqs;
pub mod health;
pub mod licenses;
pub mod partners;
pub mod portfolio;
pub mod services;
pub mod statistics;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth        login, current user, user creation
/// /carousel    hero slides
/// /services    services with gallery and video
/// /portfolio   projects by status
/// /blog        posts
/// /faqs        questions and answers
/// /about       about block
/// /contact     contact details and form submissions
/// /statistics  landing-page counters
/// /partners    partner logos
/// /licenses    certificates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/carousel", carousel::router())
        .nest("/services", services::router())
        .nest("/portfolio", portfolio::router())
        .nest("/blog", blog::router())
        .nest("/faqs", faqs::router())
        .nest("/about", about::router())
        .nest("/contact", contact::router())
        .nest("/statistics", statistics::router())
        .nest("/partners", partners::router())
        .nest("/licenses", licenses::router())
}
