use std::path::PathBuf;

use geoline_core::upload::{UploadLimits, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_VIDEO_BYTES};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Upload directory and size ceilings.
    pub uploads: UploadConfig,
    /// Superuser seeded on first start.
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                                             |
    /// |------------------------|---------------------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                           |
    /// | `PORT`                 | `8000`                                                              |
    /// | `CORS_ORIGINS`         | `http://localhost:8000,http://localhost:3000,http://localhost:5500` |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                                                                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:8000,http://localhost:3000,http://localhost:5500".into()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            uploads: UploadConfig::from_env(),
            admin: AdminConfig::from_env(),
        }
    }
}

/// Where uploaded files live and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Root directory, also served at `/uploads`.
    pub dir: PathBuf,
    pub max_image_bytes: usize,
    pub max_video_bytes: usize,
}

impl UploadConfig {
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `UPLOAD_DIR`            | `uploads`   |
    /// | `MAX_UPLOAD_SIZE`       | `10485760`  |
    /// | `MAX_VIDEO_UPLOAD_SIZE` | `104857600` |
    pub fn from_env() -> Self {
        let dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        let max_image_bytes: usize = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_IMAGE_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_SIZE must be a valid usize");

        let max_video_bytes: usize = std::env::var("MAX_VIDEO_UPLOAD_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_VIDEO_BYTES.to_string())
            .parse()
            .expect("MAX_VIDEO_UPLOAD_SIZE must be a valid usize");

        Self {
            dir: PathBuf::from(dir),
            max_image_bytes,
            max_video_bytes,
        }
    }

    pub fn limits(&self) -> UploadLimits {
        UploadLimits {
            max_image_bytes: self.max_image_bytes,
            max_video_bytes: self.max_video_bytes,
        }
    }

    /// Request body ceiling: the largest upload plus room for the other
    /// multipart fields.
    pub fn body_limit(&self) -> usize {
        self.max_image_bytes.max(self.max_video_bytes) + 1024 * 1024
    }
}

/// Credentials of the superuser created when none exists.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AdminConfig {
    /// | Env Var          | Default             |
    /// |------------------|---------------------|
    /// | `ADMIN_USERNAME` | `admin`             |
    /// | `ADMIN_EMAIL`    | `admin@geoline.com` |
    /// | `ADMIN_PASSWORD` | `admin123`          |
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@geoline.com".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
        }
    }
}
