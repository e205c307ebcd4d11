//! Router for the chat API

use std::sync::Arc;

use axum::extract::rejection::BytesRejection;
use axum::{Json, Router, body::Bytes, extract::State, routing::post};

use super::public::ChatResponse;
use crate::api::state::AppState;
use crate::chat::{ProxyError, parse_messages, relay};

type SharedState = Arc<AppState>;

/// Relay a conversation to the completion provider and return its
/// reply. The body is taken raw so that a missing or malformed
/// `messages` field, or a body that can't be read at all, is reported
/// in the same shape as every other failure.
async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ProxyError> {
    let body = body?;
    let messages = parse_messages(&body)?;
    let reply = relay(&state.config, messages).await?;

    Ok(Json(ChatResponse::success(reply.message, reply.usage)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
