use std::sync::Arc;

use sqlx::PgPool;

use crate::services::{
    MemberRepository, MemberService, WorkoutSessionRepository, WorkoutSessionService,
};

/// Store handles shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberRepository>,
    pub workouts: Arc<dyn WorkoutSessionRepository>,
}

impl AppState {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        workouts: Arc<dyn WorkoutSessionRepository>,
    ) -> Self {
        Self { members, workouts }
    }

    /// PostgreSQL-backed state over a shared pool.
    pub fn from_pool(db: PgPool) -> Self {
        Self::new(
            Arc::new(MemberService::new(db.clone())),
            Arc::new(WorkoutSessionService::new(db)),
        )
    }
}
