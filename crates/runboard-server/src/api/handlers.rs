use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use runboard_store::{NewRun, Run, LEADERBOARD_LIMIT};

use super::types::{DisplayNameUpdate, DisplayNameUpdated, Health, RunCreated};
use super::AppState;
use crate::error::ApiError;

pub(super) async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

pub(super) async fn create_run(
    State(state): State<AppState>,
    body: Result<Json<NewRun>, JsonRejection>,
) -> Result<(StatusCode, Json<RunCreated>), ApiError> {
    let Json(new_run) = body?;
    new_run.validate()?;

    let run = new_run.into_run(Utc::now());
    let run_id = run.run_id.clone();
    state.repository().insert_run(run).await?;
    tracing::debug!(run_id = %run_id, "run recorded");

    Ok((
        StatusCode::CREATED,
        Json(RunCreated {
            status: "ok".to_string(),
            run_id,
        }),
    ))
}

/// Always 200; a missing run is reported as `matched: 0`.
pub(super) async fn patch_display_name(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
    body: Result<Json<DisplayNameUpdate>, JsonRejection>,
) -> Result<Json<DisplayNameUpdated>, ApiError> {
    let Json(update) = body?;
    let matched = state
        .repository()
        .update_display_name(&run_id, &update.display_name)
        .await?;
    Ok(Json(DisplayNameUpdated::new(run_id, matched)))
}

/// Same update as PATCH, but a missing run is a 404.
pub(super) async fn put_display_name(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
    body: Result<Json<DisplayNameUpdate>, JsonRejection>,
) -> Result<Json<DisplayNameUpdated>, ApiError> {
    let Json(update) = body?;
    let matched = state
        .repository()
        .update_display_name(&run_id, &update.display_name)
        .await?;
    if matched == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DisplayNameUpdated::new(run_id, matched)))
}

pub(super) async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<Run>>, ApiError> {
    let runs = state.repository().leaderboard(LEADERBOARD_LIMIT).await?;
    Ok(Json(runs))
}
