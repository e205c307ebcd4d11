//! Integration tests for the chat proxy endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use mockito::Matcher;
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{TEST_API_KEY, body_to_json, chat_request, completion_body, test_app};

    fn user_messages() -> String {
        json!({
            "messages": [
                {"role": "assistant", "content": "Hi! I'm your NFT assistant."},
                {"role": "user", "content": "What is an NFT?"}
            ]
        })
        .to_string()
    }

    /// Tests that missing or non-array messages are rejected with 400
    #[tokio::test]
    async fn it_rejects_missing_messages() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        for body in [
            "",
            "{}",
            r#"{"messages": null}"#,
            r#"{"messages": "What is an NFT?"}"#,
            r#"{"messages": {"role": "user", "content": "hi"}}"#,
        ] {
            let app = test_app(&server.url(), Some(TEST_API_KEY));
            let response = app.oneshot(chat_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            let body = body_to_json(response.into_body()).await;
            assert_eq!(
                body,
                json!({"success": false, "error": "Messages array is required."})
            );
        }

        upstream.assert_async().await;
    }

    /// Tests that messages with roles the provider doesn't know are rejected
    #[tokio::test]
    async fn it_rejects_unknown_roles() {
        let app = test_app("http://127.0.0.1:9", Some(TEST_API_KEY));
        let body = json!({"messages": [{"role": "error", "content": "Network error"}]}).to_string();

        let response = app.oneshot(chat_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
    }

    /// Tests that a request without a configured key never reaches the provider
    #[tokio::test]
    async fn it_returns_500_when_key_not_configured() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;
        let app = test_app(&server.url(), None);

        let response = app.oneshot(chat_request(user_messages())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("not configured"));
        upstream.assert_async().await;
    }

    /// Tests that a malformed key never reaches the provider
    #[tokio::test]
    async fn it_returns_500_for_invalid_key_format() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        for key in ["sk-short", "pk-0123456789abcdefghijkl"] {
            let app = test_app(&server.url(), Some(key));
            let response = app.oneshot(chat_request(user_messages())).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_to_json(response.into_body()).await;
            assert_eq!(
                body["error"],
                "Invalid OpenAI API key format. Please check your API key."
            );
        }

        upstream.assert_async().await;
    }

    /// Tests that validation happens before the key check
    #[tokio::test]
    async fn it_validates_messages_before_key() {
        let app = test_app("http://127.0.0.1:9", None);

        let response = app.oneshot(chat_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests a successful round trip through the proxy
    #[tokio::test]
    async fn it_relays_assistant_reply() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "max_tokens": 800,
                "temperature": 0.7,
                "stream": false,
            })))
            // The system instruction goes first, then the caller's messages
            .match_request(|req| {
                let Ok(body) = req.body() else {
                    return false;
                };
                let Ok(payload) = serde_json::from_slice::<Value>(body) else {
                    return false;
                };
                let Some(messages) = payload["messages"].as_array() else {
                    return false;
                };
                messages.len() == 3
                    && messages[0]["role"] == "system"
                    && messages[0]["content"]
                        .as_str()
                        .is_some_and(|c| c.starts_with("You are an expert NFT advisor"))
                    && messages[1] == json!({"role": "assistant", "content": "Hi! I'm your NFT assistant."})
                    && messages[2] == json!({"role": "user", "content": "What is an NFT?"})
            })
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("An NFT is a unique token on a blockchain."))
            .expect(1)
            .create_async()
            .await;
        let app = test_app(&server.url(), Some(TEST_API_KEY));

        let response = app.oneshot(chat_request(user_messages())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": {
                    "role": "assistant",
                    "content": "An NFT is a unique token on a blockchain."
                },
                "usage": {
                    "prompt_tokens": 412,
                    "completion_tokens": 58,
                    "total_tokens": 470
                }
            })
        );
        upstream.assert_async().await;
    }

    /// Tests that usage is omitted when the provider doesn't send it
    #[tokio::test]
    async fn it_omits_missing_usage() {
        let mut server = mockito::Server::new_async().await;
        let _upstream = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "Hello"}}]}"#)
            .create_async()
            .await;
        let app = test_app(&server.url(), Some(TEST_API_KEY));

        let response = app.oneshot(chat_request(user_messages())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert!(body.get("usage").is_none());
        assert_eq!(body["message"]["content"], "Hello");
    }

    /// Tests that provider failures are classified by status
    #[tokio::test]
    async fn it_classifies_upstream_failures() {
        let cases = [
            (
                401,
                StatusCode::UNAUTHORIZED,
                "Invalid OpenAI API key. Please check your API key at https://platform.openai.com/account/api-keys",
            ),
            (
                429,
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again in a moment.",
            ),
            (
                403,
                StatusCode::FORBIDDEN,
                "Access denied. Please check your OpenAI account status and billing.",
            ),
            (
                503,
                StatusCode::INTERNAL_SERVER_ERROR,
                "OpenAI API error: 503. Please try again later.",
            ),
            (
                400,
                StatusCode::INTERNAL_SERVER_ERROR,
                "OpenAI API error: 400. Please try again later.",
            ),
        ];

        for (upstream_status, expected_status, expected_error) in cases {
            let mut server = mockito::Server::new_async().await;
            let upstream = server
                .mock("POST", "/v1/chat/completions")
                .with_status(upstream_status)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error": {"message": "upstream detail", "type": "invalid_request_error"}}"#)
                .expect(1)
                .create_async()
                .await;
            let app = test_app(&server.url(), Some(TEST_API_KEY));

            let response = app.oneshot(chat_request(user_messages())).await.unwrap();

            assert_eq!(response.status(), expected_status);
            let body = body_to_json(response.into_body()).await;
            assert_eq!(body, json!({"success": false, "error": expected_error}));
            // Each failure is surfaced right away without a retry
            upstream.assert_async().await;
        }
    }

    /// Tests that a success status without a reply is reported as malformed
    #[tokio::test]
    async fn it_returns_500_for_malformed_upstream_body() {
        for upstream_body in [
            r#"{"id": "chatcmpl-123"}"#,
            r#"{"choices": []}"#,
            r#"{"choices": [{"index": 0}]}"#,
        ] {
            let mut server = mockito::Server::new_async().await;
            let _upstream = server
                .mock("POST", "/v1/chat/completions")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(upstream_body)
                .create_async()
                .await;
            let app = test_app(&server.url(), Some(TEST_API_KEY));

            let response = app.oneshot(chat_request(user_messages())).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_to_json(response.into_body()).await;
            assert_eq!(
                body,
                json!({"success": false, "error": "Invalid response from AI service"})
            );
        }
    }

    /// Tests that an undecodable success body becomes an internal error
    #[tokio::test]
    async fn it_returns_500_for_non_json_upstream_body() {
        let mut server = mockito::Server::new_async().await;
        let _upstream = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;
        let app = test_app(&server.url(), Some(TEST_API_KEY));

        let response = app.oneshot(chat_request(user_messages())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    /// Tests that an unreachable provider becomes an internal error
    #[tokio::test]
    async fn it_returns_500_when_upstream_unreachable() {
        let app = test_app("http://127.0.0.1:9", Some(TEST_API_KEY));

        let response = app.oneshot(chat_request(user_messages())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    /// Tests that a body over the size limit still gets the JSON error shape
    #[tokio::test]
    async fn it_rejects_oversized_body_as_json() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;
        let app = test_app(&server.url(), Some(TEST_API_KEY));
        let content = "a".repeat(3 * 1024 * 1024);
        let body = json!({"messages": [{"role": "user", "content": content}]}).to_string();

        let response = app.oneshot(chat_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("length limit exceeded"));
        upstream.assert_async().await;
    }

    /// Tests that a body that isn't JSON at all is an internal error
    #[tokio::test]
    async fn it_returns_500_for_non_json_request() {
        let app = test_app("http://127.0.0.1:9", Some(TEST_API_KEY));

        let response = app.oneshot(chat_request("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
    }
}
