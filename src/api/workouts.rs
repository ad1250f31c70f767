use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use axum_extra::extract::WithRejection;

use super::{ApiError, AppState};
use crate::models::{CreateWorkoutSession, UpdateWorkoutSession, WorkoutSessionResponse};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workout", post(schedule_workout))
        .route("/workout/:id", put(update_workout))
        .route("/workouts", get(get_workouts))
        // Shares the `:id` segment name with the member routes.
        .route("/member/:id/workouts", get(get_member_workouts))
}

/// Schedule a workout session for a member
pub async fn schedule_workout(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateWorkoutSession>, ApiError>,
) -> Result<Json<WorkoutSessionResponse>, ApiError> {
    let session = state.workouts.create_session(payload).await?;
    tracing::info!(
        session_id = session.id,
        member_id = session.member_id,
        "workout session scheduled"
    );

    Ok(Json(session.into()))
}

/// Overwrite a session's date, duration and type
pub async fn update_workout(
    State(state): State<AppState>,
    WithRejection(Path(session_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateWorkoutSession>, ApiError>,
) -> Result<Json<WorkoutSessionResponse>, ApiError> {
    let session = state
        .workouts
        .update_session(session_id, payload)
        .await?
        .ok_or(ApiError::WorkoutSessionNotFound)?;

    Ok(Json(session.into()))
}

pub async fn get_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutSessionResponse>>, ApiError> {
    let sessions = state.workouts.list_sessions().await?;

    Ok(Json(
        sessions.into_iter().map(WorkoutSessionResponse::from).collect(),
    ))
}

/// Sessions booked by one member. An unknown member and a member without
/// sessions are both 404, told apart by the error message.
pub async fn get_member_workouts(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Vec<WorkoutSessionResponse>>, ApiError> {
    let sessions = state.workouts.get_sessions_by_member_id(member_id).await?;

    if sessions.is_empty() {
        return match state.members.get_member_by_id(member_id).await? {
            Some(_) => Err(ApiError::NoWorkoutsForMember),
            None => Err(ApiError::MemberNotFound),
        };
    }

    Ok(Json(
        sessions.into_iter().map(WorkoutSessionResponse::from).collect(),
    ))
}
