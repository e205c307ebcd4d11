//! Public types for the chat API
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::openai::Message;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Body of every chat response. Successful responses carry `message`
/// and optionally `usage`, failures carry `error`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}

impl ChatResponse {
    pub fn success(message: Message, usage: Option<Value>) -> Self {
        Self {
            success: true,
            message: Some(message),
            error: None,
            usage,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            usage: None,
        }
    }
}
