//! Router for the support API

use std::sync::Arc;

use axum::{Router, response::Json, routing::get};

use super::public::FaqResponse;
use crate::api::state::AppState;
use crate::catalog::faqs;

type SharedState = Arc<AppState>;

async fn faq() -> Json<FaqResponse> {
    Json(FaqResponse { faqs: faqs() })
}

/// Create the support router
pub fn router() -> Router<SharedState> {
    Router::new().route("/faq", get(faq))
}
