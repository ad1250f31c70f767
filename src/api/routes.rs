use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::members::member_routes;
use super::workouts::workout_routes;
use super::AppState;

pub fn create_routes(db: PgPool) -> Router {
    router(AppState::from_pool(db))
}

/// Build the application router over an already constructed store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(member_routes())
        .merge(workout_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
