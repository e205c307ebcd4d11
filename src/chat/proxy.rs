use serde_json::Value;

use super::error::{API_KEY_INVALID_FORMAT, API_KEY_MISSING, MESSAGES_REQUIRED, ProxyError};
use crate::ai::prompt;
use crate::core::AppConfig;
use crate::openai::{Message, Role, completion};

const API_KEY_PREFIX: &str = "sk-";
const API_KEY_MIN_LEN: usize = 20;

/// A successful reply from the provider.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: Message,
    pub usage: Option<Value>,
}

/// Extract the `messages` array from a raw request body.
///
/// An empty body is treated the same as a missing array. A body that
/// is present but not JSON is an internal error.
pub fn parse_messages(body: &[u8]) -> Result<Vec<Message>, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ProxyError::InvalidRequest(MESSAGES_REQUIRED.to_string()));
    }

    let payload: Value =
        serde_json::from_slice(body).map_err(|e| ProxyError::Internal(e.to_string()))?;

    let Some(Value::Array(items)) = payload.get("messages") else {
        return Err(ProxyError::InvalidRequest(MESSAGES_REQUIRED.to_string()));
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<Message>(item.clone()).map_err(|_| {
                ProxyError::InvalidRequest(format!(
                    "Message {} must have a role of system, user, or assistant and text content.",
                    idx
                ))
            })
        })
        .collect()
}

pub fn validate_api_key(api_key: Option<&str>) -> Result<&str, ProxyError> {
    let Some(api_key) = api_key else {
        return Err(ProxyError::Configuration(API_KEY_MISSING.to_string()));
    };

    if !api_key.starts_with(API_KEY_PREFIX) || api_key.len() < API_KEY_MIN_LEN {
        return Err(ProxyError::Configuration(
            API_KEY_INVALID_FORMAT.to_string(),
        ));
    }

    Ok(api_key)
}

/// Forward a conversation to the provider with the NFT advisor system
/// instruction prepended and return the assistant's reply.
///
/// Makes exactly one upstream request and never retries. Nothing is
/// sent when the credential is missing or malformed.
pub async fn relay(config: &AppConfig, messages: Vec<Message>) -> Result<ChatReply, ProxyError> {
    let api_key = validate_api_key(config.openai_api_key.as_deref())?;

    let system_msg = Message::new(Role::System, &prompt::nft_advisor()?);
    let mut transcript = Vec::with_capacity(messages.len() + 1);
    transcript.push(system_msg);
    transcript.extend(messages);

    tracing::debug!(
        "Requesting completion from {} with {} messages",
        config.openai_api_hostname,
        transcript.len()
    );

    let resp = completion(
        &transcript,
        &config.openai_api_hostname,
        api_key,
        &config.openai_model,
    )
    .await?;

    if !resp.is_success() {
        tracing::error!(
            status = resp.status,
            "OpenAI API error: {}",
            resp.body
        );
        return Err(ProxyError::from_upstream_status(resp.status));
    }

    let Some(content) = resp.reply() else {
        tracing::error!("Invalid response structure from OpenAI: {}", resp.body);
        return Err(ProxyError::MalformedUpstreamResponse);
    };

    tracing::info!("OpenAI API call successful");

    Ok(ChatReply {
        message: Message::new(Role::Assistant, content),
        usage: resp.usage(),
    })
}
