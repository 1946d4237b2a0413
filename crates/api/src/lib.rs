//! GeoLine CMS API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! bootstrap, static-image import) so integration tests and both binaries
//! can share them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod import;
pub mod middleware;
pub mod multipart;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
