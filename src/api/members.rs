use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::WithRejection;

use super::{ApiError, AppState};
use crate::models::{CreateMember, MemberResponse, MessageResponse, UpdateMember};

pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/member", post(create_member))
        .route("/members", get(get_members))
        .route(
            "/member/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
}

/// Add a new member
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateMember>, ApiError>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state.members.create_member(payload).await?;
    tracing::info!(member_id = member.id, "member created");

    Ok(Json(member.into()))
}

/// List every member
pub async fn get_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.members.list_members().await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

pub async fn get_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .get_member_by_id(member_id)
        .await?
        .ok_or(ApiError::MemberNotFound)?;

    Ok(Json(member.into()))
}

/// Overwrite a member's name, email and age
pub async fn update_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateMember>, ApiError>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .update_member(member_id, payload)
        .await?
        .ok_or(ApiError::MemberNotFound)?;

    Ok(Json(member.into()))
}

/// Delete a member and the sessions booked under it
pub async fn delete_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.members.delete_member(member_id).await? {
        return Err(ApiError::MemberNotFound);
    }
    tracing::info!(member_id, "member deleted");

    Ok(Json(MessageResponse {
        message: "Member deleted successfully".to_string(),
    }))
}
