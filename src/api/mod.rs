// API routes and handlers

pub mod error;
pub mod health;
pub mod members;
pub mod routes;
pub mod state;
pub mod workouts;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ApiError;
pub use routes::{create_routes, router};
pub use state::AppState;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use super::test_utils::{send, test_app};
    use crate::services::{MockMemberRepository, MockWorkoutSessionRepository};

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let app = test_app(
            Arc::new(MockMemberRepository::new()),
            Arc::new(MockWorkoutSessionRepository::new()),
        );

        let (status, body) = send(app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "fitness-center");
    }
}
