//! Failure taxonomy for the chat proxy.
//!
//! Every variant's `Display` text is safe to show to end users and is
//! what ends up in the `error` field of the response body.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::api::public::chat::ChatResponse;

pub(crate) const MESSAGES_REQUIRED: &str = "Messages array is required.";
pub(crate) const API_KEY_MISSING: &str =
    "OpenAI API key not configured. Please add your API key to environment variables.";
pub(crate) const API_KEY_INVALID_FORMAT: &str =
    "Invalid OpenAI API key format. Please check your API key.";
const INTERNAL_FALLBACK: &str = "Failed to process chat message. Please try again.";

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The request body did not carry a usable `messages` array.
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider credential is missing or malformed.
    #[error("{0}")]
    Configuration(String),

    #[error(
        "Invalid OpenAI API key. Please check your API key at https://platform.openai.com/account/api-keys"
    )]
    Auth,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Access denied. Please check your OpenAI account status and billing.")]
    AccessDenied,

    /// Any other non-success status from the provider.
    #[error("OpenAI API error: {0}. Please try again later.")]
    Upstream(u16),

    /// The provider answered successfully but without a reply.
    #[error("Invalid response from AI service")]
    MalformedUpstreamResponse,

    #[error("{}", internal_message(.0))]
    Internal(String),
}

fn internal_message(msg: &str) -> &str {
    if msg.trim().is_empty() {
        INTERNAL_FALLBACK
    } else {
        msg
    }
}

impl ProxyError {
    /// Classify a non-success status returned by the provider.
    pub fn from_upstream_status(status: u16) -> Self {
        match status {
            401 => ProxyError::Auth,
            403 => ProxyError::AccessDenied,
            429 => ProxyError::RateLimited,
            other => ProxyError::Upstream(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Auth => StatusCode::UNAUTHORIZED,
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::AccessDenied => StatusCode::FORBIDDEN,
            ProxyError::Configuration(_)
            | ProxyError::Upstream(_)
            | ProxyError::MalformedUpstreamResponse
            | ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ProxyError {
    fn from(err: anyhow::Error) -> Self {
        ProxyError::Internal(err.to_string())
    }
}

/// A body that couldn't be buffered, usually because it is over the
/// size limit.
impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        ProxyError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Chat proxy error: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Chat proxy rejected request: {}", self);
        }

        (status, Json(ChatResponse::failure(&self.to_string()))).into_response()
    }
}
