//! Integration tests for the `/services` resource: galleries, the
//! placeholder image and video references.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, png_file, post_multipart_auth, put_multipart_auth, text, Part,
};
use geoline_core::media::PLACEHOLDER_IMAGE;
use serde_json::Value;
use sqlx::PgPool;

fn fake_video() -> Part {
    Part::File {
        name: "video_file",
        file_name: "clip.mp4",
        content_type: "video/mp4",
        bytes: vec![0u8; 64],
    }
}

async fn create_service(test: &common::TestApp, token: &str, parts: &[Part]) -> Value {
    let response = post_multipart_auth(test.app(), "/api/services", parts, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// A service without media falls back to the shared placeholder.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_media_uses_placeholder(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let service = create_service(&test, &token, &[text("title", "Batimetriya")]).await;

    assert_eq!(service["image_path"], PLACEHOLDER_IMAGE);
    assert!(service["images"].is_null());
    assert!(service["video_url"].is_null());
}

/// The first gallery entry becomes the primary image.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_gallery_uses_first_entry(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let gallery = r#"["services/a.jpg","services/b.jpg"]"#;
    let service = create_service(
        &test,
        &token,
        &[text("title", "SONAR"), text("images_json", gallery)],
    )
    .await;

    assert_eq!(service["image_path"], "services/a.jpg");
    assert_eq!(service["images"], gallery);
}

/// An uploaded image is prepended to the gallery; the gallery head still
/// wins as primary image.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_image_and_gallery(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let service = create_service(
        &test,
        &token,
        &[
            text("title", "3D"),
            text("images_json", r#"["services/a.jpg"]"#),
            png_file("image"),
        ],
    )
    .await;

    assert_eq!(service["image_path"], "services/a.jpg");
    let images: Vec<Value> =
        serde_json::from_str(service["images"].as_str().unwrap()).unwrap();
    assert_eq!(images.len(), 2);
    let uploaded = images[0].as_str().unwrap();
    assert!(uploaded.starts_with("services/"));
    assert!(test.stored(uploaded));
}

/// A video that cannot be thumbnailed keeps the placeholder image.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unreadable_video_keeps_placeholder(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let service = create_service(
        &test,
        &token,
        &[
            text("title", "Video"),
            text("video_url", "https://youtube.com/ignored"),
            fake_video(),
        ],
    )
    .await;

    let video = service["video_url"].as_str().unwrap();
    assert!(video.starts_with("services/videos/"));
    assert!(video.ends_with(".mp4"));
    assert!(test.stored(video));
    assert_eq!(service["image_path"], PLACEHOLDER_IMAGE);
}

/// Unsupported video types are refused and nothing is stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_bad_video_type_returns_400(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_multipart_auth(
        test.app(),
        "/api/services",
        &[
            text("title", "Video"),
            Part::File {
                name: "video_file",
                file_name: "clip.mkv",
                content_type: "video/x-matroska",
                bytes: vec![0u8; 16],
            },
        ],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let listed = body_json(get(test.app(), "/api/services").await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Gallery uploads
// ---------------------------------------------------------------------------

/// Bulk upload returns one stored path per image.
#[sqlx::test(migrations = "../db/migrations")]
async fn upload_images_returns_paths(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_multipart_auth(
        test.app(),
        "/api/services/upload-images",
        &[png_file("images"), png_file("images")],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let paths = body_json(response).await;
    let paths = paths.as_array().unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| test.stored(p.as_str().unwrap())));
}

/// Files that are not images are skipped, not fatal.
#[sqlx::test(migrations = "../db/migrations")]
async fn upload_images_skips_non_images(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_multipart_auth(
        test.app(),
        "/api/services/upload-images",
        &[
            png_file("images"),
            Part::File {
                name: "images",
                file_name: "notes.txt",
                content_type: "text/plain",
                bytes: b"hello".to_vec(),
            },
        ],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

/// An upload request without files is a bad request.
#[sqlx::test(migrations = "../db/migrations")]
async fn upload_images_without_files_returns_400(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_multipart_auth(
        test.app(),
        "/api/services/upload-images",
        &[text("note", "empty")],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Replacing the gallery keeps an existing primary image.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_images_sets_gallery(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(&test, &token, &[text("title", "Maps")]).await;
    let id = service["id"].as_i64().unwrap();

    let response = put_multipart_auth(
        test.app(),
        &format!("/api/services/{id}/images"),
        &[text("images_json", r#"[{"path":"services/x.jpg"}]"#)],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["image_path"], PLACEHOLDER_IMAGE);
    assert_eq!(updated["images"], r#"[{"path":"services/x.jpg"}]"#);
}

/// Gallery payloads must be a JSON array.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_images_rejects_invalid_json(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(&test, &token, &[text("title", "Maps")]).await;
    let id = service["id"].as_i64().unwrap();

    for raw in ["not json", r#"{"path":"a.jpg"}"#] {
        let response = put_multipart_auth(
            test.app(),
            &format!("/api/services/{id}/images"),
            &[text("images_json", raw)],
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {raw}");
    }
}

/// Replacing the primary image rewrites its gallery entry and removes the
/// old file.
#[sqlx::test(migrations = "../db/migrations")]
async fn image_replacement_updates_gallery(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(&test, &token, &[text("title", "GIS"), png_file("image")]).await;
    let id = service["id"].as_i64().unwrap();
    let old = service["image_path"].as_str().unwrap().to_string();

    let response = put_multipart_auth(
        test.app(),
        &format!("/api/services/{id}/image"),
        &[png_file("image")],
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    let new = updated["image_path"].as_str().unwrap().to_string();

    assert_ne!(new, old);
    let gallery: Value = serde_json::from_str(updated["images"].as_str().unwrap()).unwrap();
    assert_eq!(gallery, serde_json::json!([new.clone()]));
    assert!(test.stored(&new));
    assert!(!test.stored(&old));
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

/// A video URL can be set and later cleared.
#[sqlx::test(migrations = "../db/migrations")]
async fn video_url_set_and_clear(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(&test, &token, &[text("title", "Flood")]).await;
    let id = service["id"].as_i64().unwrap();

    let set = put_multipart_auth(
        test.app(),
        &format!("/api/services/{id}/video"),
        &[text("video_url", "  https://youtube.com/watch?v=abc  ")],
        &token,
    )
    .await;
    assert_eq!(set.status(), StatusCode::OK);
    assert_eq!(
        body_json(set).await["video_url"],
        "https://youtube.com/watch?v=abc"
    );

    let cleared = put_multipart_auth(
        test.app(),
        &format!("/api/services/{id}/video"),
        &[text("video_url", "")],
        &token,
    )
    .await;
    assert_eq!(cleared.status(), StatusCode::OK);
    assert!(body_json(cleared).await["video_url"].is_null());
}

/// Replacing an uploaded video deletes the previous file.
#[sqlx::test(migrations = "../db/migrations")]
async fn video_replacement_removes_old_file(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(&test, &token, &[text("title", "Flood"), fake_video()]).await;
    let id = service["id"].as_i64().unwrap();
    let old_video = service["video_url"].as_str().unwrap().to_string();
    assert!(test.stored(&old_video));

    let response = put_multipart_auth(
        test.app(),
        &format!("/api/services/{id}/video"),
        &[text("video_url", "https://vimeo.com/1")],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["video_url"], "https://vimeo.com/1");
    assert!(!test.stored(&old_video));
}

/// Video updates on a missing service are 404s.
#[sqlx::test(migrations = "../db/migrations")]
async fn video_update_missing_service_returns_404(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = put_multipart_auth(
        test.app(),
        "/api/services/9999/video",
        &[text("video_url", "https://vimeo.com/1")],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Deleting a service removes its image and uploaded video.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_service_removes_media(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    let service = create_service(
        &test,
        &token,
        &[text("title", "Inventory"), png_file("image"), fake_video()],
    )
    .await;
    let id = service["id"].as_i64().unwrap();
    let image = service["image_path"].as_str().unwrap().to_string();
    let video = service["video_url"].as_str().unwrap().to_string();
    assert!(test.stored(&image));

    let response = delete_auth(test.app(), &format!("/api/services/{id}"), &token).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!test.stored(&image));
    assert!(!test.stored(&video));
}

// ---------------------------------------------------------------------------
// Body limit
// ---------------------------------------------------------------------------

/// A form larger than the global body limit is refused with 413 and
/// nothing is stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn oversized_form_is_rejected_with_413(pool: PgPool) {
    let test = common::build_test_app_with(pool.clone(), |config| {
        config.uploads.max_image_bytes = 1024;
        config.uploads.max_video_bytes = 1024;
    });
    let token = test.superuser_token(&pool).await;
    let video = Part::File {
        name: "video_file",
        file_name: "clip.mp4",
        content_type: "video/mp4",
        bytes: vec![0u8; 3 * 1024 * 1024],
    };

    let response = post_multipart_auth(
        test.app(),
        "/api/services",
        &[text("title", "Seismic"), video],
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["code"], "PAYLOAD_TOO_LARGE");
    assert!(!test.uploads.path().join("services").exists());

    let listed = body_json(get(test.app(), "/api/services").await).await;
    assert!(listed.as_array().unwrap().is_empty());
}
