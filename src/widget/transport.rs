use async_trait::async_trait;
use thiserror::Error;

use crate::api::public::chat::{ChatRequest, ChatResponse};
use crate::openai::Message;

/// The request never produced a usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the proxy answered, success or failure.
#[derive(Clone, Debug)]
pub struct ProxyReply {
    pub status: u16,
    pub body: ChatResponse,
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, messages: &[Message]) -> Result<ProxyReply, TransportError>;
}

/// Posts conversations to a running server's `/api/chat` endpoint.
pub struct HttpTransport {
    url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: format!("{}/api/chat", base_url.trim_end_matches("/")),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, messages: &[Message]) -> Result<ProxyReply, TransportError> {
        let payload = ChatRequest {
            messages: messages.to_vec(),
        };
        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body: ChatResponse = serde_json::from_slice(&bytes)?;

        Ok(ProxyReply { status, body })
    }
}
