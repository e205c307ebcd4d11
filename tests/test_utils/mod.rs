//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use serde_json::Value;

use nftconnect::api::AppState;
use nftconnect::api::app;
use nftconnect::core::AppConfig;

/// A key that passes the proxy's format check.
pub const TEST_API_KEY: &str = "sk-test-0123456789abcdef";

/// Creates a test application router that sends completion requests
/// to `openai_api_hostname`, usually a `mockito` server.
pub fn test_app(openai_api_hostname: &str, openai_api_key: Option<&str>) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: openai_api_hostname.to_string(),
        openai_api_key: openai_api_key.map(String::from),
        openai_model: String::from("gpt-4o"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri("/api/chat")
        .method("POST")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

/// A chat completion body as sent by OpenAI.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 412,
            "completion_tokens": 58,
            "total_tokens": 470
        }
    })
    .to_string()
}
