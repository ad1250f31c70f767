use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{CreateWorkoutSession, UpdateWorkoutSession, WorkoutSession};

/// Persistence operations on the `workout_sessions` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutSessionRepository: Send + Sync {
    /// Inserts a session. The member reference is not checked.
    async fn create_session(
        &self,
        session_data: CreateWorkoutSession,
    ) -> Result<WorkoutSession, RepositoryError>;

    async fn update_session(
        &self,
        session_id: i32,
        session_data: UpdateWorkoutSession,
    ) -> Result<Option<WorkoutSession>, RepositoryError>;

    async fn list_sessions(&self) -> Result<Vec<WorkoutSession>, RepositoryError>;

    async fn get_sessions_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<WorkoutSession>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct WorkoutSessionService {
    db: PgPool,
}

impl WorkoutSessionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkoutSessionRepository for WorkoutSessionService {
    async fn create_session(
        &self,
        session_data: CreateWorkoutSession,
    ) -> Result<WorkoutSession, RepositoryError> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            INSERT INTO workout_sessions (member_id, date, duration, session_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, member_id, date, duration, session_type, created_at, updated_at
            "#,
        )
        .bind(session_data.member_id)
        .bind(session_data.date)
        .bind(session_data.duration)
        .bind(&session_data.session_type)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(
            session_id = session.id,
            member_id = session.member_id,
            "scheduled workout session"
        );
        Ok(session)
    }

    async fn update_session(
        &self,
        session_id: i32,
        session_data: UpdateWorkoutSession,
    ) -> Result<Option<WorkoutSession>, RepositoryError> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            UPDATE workout_sessions
            SET date = $2,
                duration = $3,
                session_type = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING id, member_id, date, duration, session_type, created_at, updated_at
            "#,
        )
        .bind(session_id)
        .bind(session_data.date)
        .bind(session_data.duration)
        .bind(&session_data.session_type)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    async fn list_sessions(&self) -> Result<Vec<WorkoutSession>, RepositoryError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, member_id, date, duration, session_type, created_at, updated_at FROM workout_sessions ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    async fn get_sessions_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<WorkoutSession>, RepositoryError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, member_id, date, duration, session_type, created_at, updated_at FROM workout_sessions WHERE member_id = $1 ORDER BY date ASC, id ASC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }
}
