use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::config::Config;
use crate::models::answers::Answers;
use crate::models::plan::{Plan, WorkoutDay};
use crate::models::progress::{ExerciseRef, ProgressLog, ProgressSummary};
use crate::services::progress::{self, ProgressError};
use crate::services::plan_builder;
use crate::store::{PlanStore, StoredPlan};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn PlanStore>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanResponse {
    pub id: String,
    pub plan: Plan,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub plan_id: String,
    pub index: usize,
    pub workout: WorkoutDay,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub log: ProgressLog,
    pub summary: ProgressSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUpdate {
    pub workout_index: usize,
    pub exercise_index: usize,
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub workout_index: usize,
    #[serde(default)]
    pub note: String,
}

/// The start form posts its JSON without a content type, so the body is
/// parsed by hand instead of through the `Json` extractor.
pub async fn create_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatePlanResponse>, ApiError> {
    let answers: Answers = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "plan.invalid_answers");
        ApiError::from(e)
    })?;
    let plan = plan_builder::build_plan(&answers);

    tracing::info!(
        goal = ?plan.goal,
        equipment = ?plan.equipment,
        requested_days = answers.days_per_week,
        days_per_week = plan.days_per_week,
        "plan.generated"
    );

    let stored = state
        .store
        .create(plan, Utc::now(), state.config.plan_ttl());

    tracing::info!(plan_id = %stored.id, expires_at = %stored.expires_at, "plan.stored");

    Ok(Json(CreatePlanResponse {
        id: stored.id,
        plan: stored.plan,
        expires_at: stored.expires_at,
    }))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredPlan>, ApiError> {
    let stored = load_plan(&state, &id)?;
    Ok(Json(stored))
}

pub async fn get_workout(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let stored = load_plan(&state, &id)?;
    let workout = stored
        .plan
        .workout(index)
        .cloned()
        .ok_or(ProgressError::UnknownWorkout(index))?;

    Ok(Json(WorkoutResponse {
        plan_id: stored.id,
        index,
        workout,
    }))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let (stored, log) = state.store.progress(&id, Utc::now())?;
    Ok(Json(progress_response(&stored.plan, log)))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ExerciseUpdate>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let now = Utc::now();
    let stored = state.store.get(&id, now)?;
    let exercise = ExerciseRef {
        workout_index: update.workout_index,
        exercise_index: update.exercise_index,
    };
    progress::check_exercise(&stored.plan, exercise)?;

    let log = state
        .store
        .set_exercise(&id, now, exercise, update.checked)?;

    tracing::info!(
        plan_id = %id,
        workout_index = exercise.workout_index,
        exercise_index = exercise.exercise_index,
        checked = update.checked,
        "progress.updated"
    );

    Ok(Json(progress_response(&stored.plan, log)))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<NoteUpdate>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let now = Utc::now();
    let stored = state.store.get(&id, now)?;
    progress::check_workout(&stored.plan, update.workout_index)?;

    let log = state
        .store
        .set_note(&id, now, update.workout_index, update.note)?;

    tracing::info!(plan_id = %id, workout_index = update.workout_index, "progress.note_updated");

    Ok(Json(progress_response(&stored.plan, log)))
}

pub async fn reset_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.reset_progress(&id, Utc::now())?;
    tracing::info!(plan_id = %id, "progress.reset");
    Ok(StatusCode::NO_CONTENT)
}

fn load_plan(state: &AppState, id: &str) -> Result<StoredPlan, ApiError> {
    state.store.get(id, Utc::now()).map_err(|e| {
        tracing::debug!(plan_id = %id, error = %e, "plan.lookup_failed");
        ApiError::from(e)
    })
}

fn progress_response(plan: &Plan, log: ProgressLog) -> ProgressResponse {
    let summary = progress::summarize(plan, &log);
    ProgressResponse { log, summary }
}
