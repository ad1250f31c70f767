use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WorkoutSession {
    pub id: i32,
    pub member_id: i32,
    pub date: NaiveDate,
    /// Length of the session in minutes.
    pub duration: i32,
    pub session_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /workout`. The member id is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkoutSession {
    pub member_id: i32,
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(rename = "type")]
    pub session_type: String,
}

/// Request body for `PUT /workout/{id}`. The owning member cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkoutSession {
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(rename = "type")]
    pub session_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSessionResponse {
    pub id: i32,
    pub member_id: i32,
    pub date: NaiveDate,
    pub duration: i32,
    #[serde(rename = "type")]
    pub session_type: String,
}

impl From<WorkoutSession> for WorkoutSessionResponse {
    fn from(session: WorkoutSession) -> Self {
        Self {
            id: session.id,
            member_id: session.member_id,
            date: session.date,
            duration: session.duration,
            session_type: session.session_type,
        }
    }
}
