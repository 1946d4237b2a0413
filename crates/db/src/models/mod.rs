//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! The `sort_order` column is exposed on the wire as `order`.

pub mod about;
pub mod blog;
pub mod carousel;
pub mod contact;
pub mod faq;
pub mod license;
pub mod partner;
pub mod portfolio;
pub mod service;
pub mod statistic;
pub mod user;
