//! Domain types and pure logic shared by the GeoLine CMS crates.
//!
//! Nothing in here touches the database; persistence lives in `geoline-db`
//! and HTTP concerns in `geoline-api`.

pub mod content;
pub mod error;
pub mod ffmpeg;
pub mod imaging;
pub mod media;
pub mod pagination;
pub mod roles;
pub mod thumbnail;
pub mod types;
pub mod upload;
