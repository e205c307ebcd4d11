use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Upper bound on generated tokens for a single reply.
pub const MAX_TOKENS: u32 = 800;

pub const TEMPERATURE: f64 = 0.7;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A role-tagged message as understood by OpenAI compatible chat
/// completion APIs.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// The raw result of a chat completion request. The status is kept
/// alongside the body so callers can decide how to classify
/// failures.
#[derive(Debug)]
pub struct CompletionResponse {
    pub status: u16,
    pub body: Value,
}

impl CompletionResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Text of the first choice's message, if the provider sent one.
    pub fn reply(&self) -> Option<&str> {
        self.body["choices"][0]["message"]["content"].as_str()
    }

    /// Token accounting, passed through untouched.
    pub fn usage(&self) -> Option<Value> {
        self.body.get("usage").filter(|v| !v.is_null()).cloned()
    }
}

/// Requests a single, non-streaming chat completion.
///
/// Error bodies on non-success statuses are read on a best effort
/// basis and fall back to `null`. A success body that is not JSON is
/// returned as an error.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<CompletionResponse, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
        "stream": false,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: Value = if status.is_success() {
        response.json().await?
    } else {
        response.json().await.unwrap_or(Value::Null)
    };

    Ok(CompletionResponse {
        status: status.as_u16(),
        body,
    })
}
