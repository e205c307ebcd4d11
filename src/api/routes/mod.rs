//! API routes module

pub mod chat;
pub mod explore;
pub mod support;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat proxy
        .nest("/chat", chat::router())
        // Sample catalog for the explore page
        .nest("/explore", explore::router())
        // Support page content
        .nest("/support", support::router())
}
