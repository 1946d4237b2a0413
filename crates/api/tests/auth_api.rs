//! Integration tests for login, the current-user endpoint and user creation.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_form, post_json, post_json_auth};
use geoline_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Form-encoded credentials return a bearer token.
#[sqlx::test(migrations = "../db/migrations")]
async fn form_login_returns_bearer_token(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    create_user(&pool, "admin", "admin123", true).await;

    let response = post_form(
        test.app(),
        "/api/auth/login",
        "username=admin&password=admin123",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 30 * 60);
}

/// The JSON login endpoint accepts the same credentials.
#[sqlx::test(migrations = "../db/migrations")]
async fn json_login_returns_bearer_token(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    create_user(&pool, "admin", "admin123", true).await;

    let response = post_json(
        test.app(),
        "/api/auth/login/json",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let me = get_auth(test.app(), "/api/auth/me", &token).await;
    assert_eq!(me.status(), StatusCode::OK);
    let json = body_json(me).await;
    assert_eq!(json["username"], "admin");
    assert_eq!(json["is_superuser"], true);
    assert!(json.get("password_hash").is_none());
}

/// A wrong password and an unknown user get the same 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_credentials_return_401(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    create_user(&pool, "admin", "admin123", true).await;

    let wrong_password = post_json(
        test.app(),
        "/api/auth/login/json",
        json!({ "username": "admin", "password": "nope" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(wrong_password).await;
    assert_eq!(json["error"], "Incorrect username or password");

    let unknown = post_json(
        test.app(),
        "/api/auth/login/json",
        json!({ "username": "ghost", "password": "admin123" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

/// Deactivated accounts cannot log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn inactive_user_login_returns_400(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let user = create_user(&pool, "former", "secret123", true).await;
    UserRepo::set_active(&pool, user.id, false).await.unwrap();

    let response = post_json(
        test.app(),
        "/api/auth/login/json",
        json!({ "username": "former", "password": "secret123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Inactive user");
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

/// No token, no access.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_returns_401(pool: PgPool) {
    let test = common::build_test_app(pool);
    let response = get(test.app(), "/api/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

/// A malformed token is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_garbage_token_returns_401(pool: PgPool) {
    let test = common::build_test_app(pool);
    let response = get_auth(test.app(), "/api/auth/me", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Valid tokens for regular accounts do not reach superuser endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn regular_user_gets_403(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.token_for(&pool, "editor", false).await;

    let response = get_auth(test.app(), "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A token outliving its account is refused.
#[sqlx::test(migrations = "../db/migrations")]
async fn token_for_deleted_user_returns_401(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;
    sqlx::query("DELETE FROM users").execute(&pool).await.unwrap();

    let response = get_auth(test.app(), "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// User creation
// ---------------------------------------------------------------------------

/// A superuser can create accounts that can then log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn superuser_creates_user(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_json_auth(
        test.app(),
        "/api/auth/users",
        json!({ "username": "editor", "email": "editor@geoline.com", "password": "pw" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "editor");
    assert_eq!(json["is_superuser"], false);
    assert_eq!(json["is_active"], true);

    let login = post_form(test.app(), "/api/auth/login", "username=editor&password=pw").await;
    assert_eq!(login.status(), StatusCode::OK);
}

/// Reusing a username or email is a conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_user_returns_409(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let taken_name = post_json_auth(
        test.app(),
        "/api/auth/users",
        json!({ "username": "root", "email": "other@geoline.com", "password": "pw" }),
        &token,
    )
    .await;
    assert_eq!(taken_name.status(), StatusCode::CONFLICT);

    let taken_email = post_json_auth(
        test.app(),
        "/api/auth/users",
        json!({ "username": "fresh", "email": "root@example.com", "password": "pw" }),
        &token,
    )
    .await;
    assert_eq!(taken_email.status(), StatusCode::CONFLICT);
}

/// Invalid emails fail validation.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_email_returns_400(pool: PgPool) {
    let test = common::build_test_app(pool.clone());
    let token = test.superuser_token(&pool).await;

    let response = post_json_auth(
        test.app(),
        "/api/auth/users",
        json!({ "username": "editor", "email": "not-an-email", "password": "pw" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Creating users requires a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_user_without_token_returns_401(pool: PgPool) {
    let test = common::build_test_app(pool);

    let response = post_json(
        test.app(),
        "/api/auth/users",
        json!({ "username": "editor", "email": "editor@geoline.com", "password": "pw" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
