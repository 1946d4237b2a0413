//! Handlers for the `/statistics` resource (the counters on the landing page).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geoline_core::content::validate;
use geoline_core::error::CoreError;
use geoline_core::types::DbId;
use geoline_db::models::statistic::{CreateStatistic, Statistic, UpdateStatistic};
use geoline_db::repositories::StatisticRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperuser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/statistics
pub async fn list_statistics(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Statistic>>> {
    let (limit, offset) = params.page();
    let statistics = StatisticRepo::list(&state.pool, params.active_only, limit, offset).await?;
    Ok(Json(statistics))
}

/// GET /api/statistics/{id}
pub async fn get_statistic(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Statistic>> {
    let statistic = StatisticRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Statistic",
            id,
        }))?;
    Ok(Json(statistic))
}

/// POST /api/statistics
pub async fn create_statistic(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Json(input): Json<CreateStatistic>,
) -> AppResult<(StatusCode, Json<Statistic>)> {
    validate(&input)?;
    let statistic = StatisticRepo::create(&state.pool, &input).await?;

    tracing::info!(statistic_id = statistic.id, user_id = user.id, "Statistic created");

    Ok((StatusCode::CREATED, Json(statistic)))
}

/// PUT /api/statistics/{id}
pub async fn update_statistic(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatistic>,
) -> AppResult<Json<Statistic>> {
    validate(&input)?;
    let statistic = StatisticRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Statistic",
            id,
        }))?;

    tracing::info!(statistic_id = id, user_id = user.id, "Statistic updated");

    Ok(Json(statistic))
}

/// DELETE /api/statistics/{id}
pub async fn delete_statistic(
    RequireSuperuser(user): RequireSuperuser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StatisticRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Statistic",
            id,
        }));
    }

    tracing::info!(statistic_id = id, user_id = user.id, "Statistic deleted");

    Ok(StatusCode::NO_CONTENT)
}
