//! Handlers for the `/auth` resource (login, current user, user creation).

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::roles::role_for;
use geoline_core::types::DbId;
use geoline_db::models::user::{CreateUser, User};
use geoline_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Credentials for `POST /auth/login` and `POST /auth/login/json`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login credentials sent either as an HTML form or as JSON.
///
/// `application/json` bodies are parsed as JSON; everything else goes
/// through the urlencoded form extractor.
pub struct LoginInput(pub LoginRequest);

impl<S: Send + Sync> FromRequest<S> for LoginInput {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(input) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(LoginInput(input))
        } else {
            let Form(input) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(LoginInput(input))
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Public view of a user account.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}

/// Request body for `POST /auth/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default)]
    pub is_superuser: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password sent as a form (or JSON).
pub async fn login(
    State(state): State<AppState>,
    LoginInput(input): LoginInput,
) -> AppResult<Json<TokenResponse>> {
    authenticate(&state, &input).await.map(Json)
}

/// POST /api/auth/login/json
pub async fn login_json(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    authenticate(&state, &input).await.map(Json)
}

/// Check credentials and issue an access token.
async fn authenticate(state: &AppState, input: &LoginRequest) -> AppResult<TokenResponse> {
    let incorrect = || {
        AppError::Core(CoreError::Unauthorized(
            "Incorrect username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(incorrect)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %input.username, "Rejected login attempt");
        return Err(incorrect());
    }

    if !user.is_active {
        return Err(AppError::BadRequest("Inactive user".into()));
    }

    let access_token = generate_access_token(
        user.id,
        &user.username,
        role_for(user.is_superuser),
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    })
}

/// GET /api/auth/me
pub async fn me(RequireSuperuser(user): RequireSuperuser) -> Json<UserResponse> {
    Json(user.into())
}

/// POST /api/auth/users
///
/// Create a user account. Duplicate usernames or emails are rejected with
/// 409 before hashing.
pub async fn create_user(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate(&input)?;

    if UserRepo::exists_by_username_or_email(&state.pool, &input.username, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Username or email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            is_superuser: input.is_superuser,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, created_by = admin.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}
