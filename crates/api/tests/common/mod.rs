//! Shared helpers for the API integration tests.
//!
//! Each test gets its own database (via `#[sqlx::test]`) and its own
//! temporary upload directory, so stored files never leak between tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use geoline_api::auth::jwt::{generate_access_token, JwtConfig};
use geoline_api::auth::password::hash_password;
use geoline_api::config::{AdminConfig, ServerConfig, UploadConfig};
use geoline_api::router::build_app_router;
use geoline_api::state::AppState;
use geoline_core::roles::role_for;
use geoline_core::upload::{UploadStore, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_VIDEO_BYTES};
use geoline_db::models::user::{CreateUser, User};
use geoline_db::repositories::UserRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "geoline-test-boundary";

/// Build a test `ServerConfig` whose uploads go to `upload_dir`.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".into()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-key-for-integration-tests".into(),
            access_token_expiry_mins: 30,
        },
        uploads: UploadConfig {
            dir: upload_dir.to_path_buf(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_video_bytes: DEFAULT_MAX_VIDEO_BYTES,
        },
        admin: AdminConfig {
            username: "admin".into(),
            email: "admin@geoline.com".into(),
            password: "admin123".into(),
        },
    }
}

/// A router plus the upload directory backing it. The directory is removed
/// when the `TestApp` is dropped.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Whether a stored relative path exists in the upload directory.
    pub fn stored(&self, rel: &str) -> bool {
        self.uploads.path().join(rel).exists()
    }

    /// Token for a freshly created user.
    pub async fn token_for(&self, pool: &PgPool, username: &str, is_superuser: bool) -> String {
        let user = create_user(pool, username, "secret123", is_superuser).await;
        generate_access_token(user.id, &user.username, role_for(user.is_superuser), &self.config.jwt)
            .expect("token generation")
    }

    /// Token for a new superuser named `root`.
    pub async fn superuser_token(&self, pool: &PgPool) -> String {
        self.token_for(pool, "root", true).await
    }
}

/// Build the full application router with every middleware layer, backed by
/// a fresh temporary upload directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    build_test_app_with(pool, |_| {})
}

/// Like [`build_test_app`], with `adjust` applied to the config first.
pub fn build_test_app_with(pool: PgPool, adjust: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let uploads = TempDir::new().expect("temp upload dir");
    let mut config = test_config(uploads.path());
    adjust(&mut config);
    let store = UploadStore::new(config.uploads.dir.clone(), config.uploads.limits());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads: Arc::new(store),
    };
    let router = build_app_router(state, &config);
    TestApp {
        router,
        config,
        uploads,
    }
}

/// Insert a user with a hashed password.
pub async fn create_user(pool: &PgPool, username: &str, password: &str, is_superuser: bool) -> User {
    let input = CreateUser {
        username: username.into(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(password).expect("hash password"),
        is_superuser,
    };
    UserRepo::create(pool, &input).await.expect("create user")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request failed")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("build request")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), &body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

/// URL-encoded form post, as the OAuth2-style login endpoint expects.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

/// One part of a multipart form.
pub enum Part {
    Text(&'static str, String),
    File {
        name: &'static str,
        file_name: &'static str,
        content_type: &'static str,
        bytes: Vec<u8>,
    },
}

pub fn text(name: &'static str, value: impl Into<String>) -> Part {
    Part::Text(name, value.into())
}

pub fn png_file(name: &'static str) -> Part {
    Part::File {
        name,
        file_name: "upload.png",
        content_type: "image/png",
        bytes: png_bytes(),
    }
}

/// Encode `parts` as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn send_multipart_auth(
    app: Router,
    method: Method,
    uri: &str,
    parts: &[Part],
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(multipart_body(parts)))
        .expect("build request");
    send(app, request).await
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    parts: &[Part],
    token: &str,
) -> Response<Body> {
    send_multipart_auth(app, Method::POST, uri, parts, token).await
}

pub async fn put_multipart_auth(
    app: Router,
    uri: &str,
    parts: &[Part],
    token: &str,
) -> Response<Body> {
    send_multipart_auth(app, Method::PUT, uri, parts, token).await
}

/// A small valid PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([30, 120, 200]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
