pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::humanize::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/humanize", post(handlers::handle_humanize))
        .route(
            "/api/v1/transform-voice",
            post(handlers::handle_transform_voice),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::humanize::TextStyleTransformer;

    fn app() -> Router {
        build_router(AppState {
            transformer: Arc::new(TextStyleTransformer::new().unwrap()),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "humanizer-api");
    }

    #[tokio::test]
    async fn test_humanize_plain_text() {
        let (status, body) = post_json(
            "/api/v1/humanize",
            json!({ "text": "I cannot believe that you are not coming. In addition, the team completed the task." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["text"],
            "I can't believe that you aren't coming. on top of that, the team completed the task."
        );
        assert_eq!(body["humanized"], true);
        assert_eq!(body["voice"], Value::Null);
    }

    #[tokio::test]
    async fn test_humanize_wrapped_query() {
        let (status, body) =
            post_json("/api/v1/humanize", json!({ "text": { "query": "I am ready" } })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "I'm ready");
    }

    #[tokio::test]
    async fn test_humanize_with_voice() {
        let (status, body) = post_json(
            "/api/v1/humanize",
            json!({ "text": "The dog chased the cat", "target_voice": "passive" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "The cat was chased by the dog");
        assert_eq!(body["voice"], "passive");
    }

    #[tokio::test]
    async fn test_humanize_rejects_unknown_voice() {
        let (status, body) = post_json(
            "/api/v1/humanize",
            json!({ "text": "The dog chased the cat", "target_voice": "imperative" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_humanize_rejects_missing_text() {
        let (status, body) = post_json("/api/v1/humanize", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "text cannot be empty");
    }

    #[tokio::test]
    async fn test_humanize_rejects_object_with_null_text() {
        let (status, body) =
            post_json("/api/v1/humanize", json!({ "text": { "text": null } })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_transform_voice_active() {
        let (status, body) = post_json(
            "/api/v1/transform-voice",
            json!({ "text": "The cat was chased by the dog", "target_voice": "active" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "The dog chased the cat");
    }

    #[tokio::test]
    async fn test_transform_voice_rejects_blank_text() {
        let (status, _) = post_json(
            "/api/v1/transform-voice",
            json!({ "text": "  ", "target_voice": "active" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
