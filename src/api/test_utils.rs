use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::{router, AppState};
use crate::services::{MemberRepository, WorkoutSessionRepository};

pub fn test_app(
    members: Arc<dyn MemberRepository>,
    workouts: Arc<dyn WorkoutSessionRepository>,
) -> Router {
    router(AppState::new(members, workouts))
}

/// Send one request and decode the JSON response body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(body_data) => builder.body(Body::from(body_data.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
