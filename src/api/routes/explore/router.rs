//! Router for the explore API

use std::sync::Arc;

use axum::{Router, response::Json, routing::get};
use axum_extra::extract::Query;

use super::public::{ExploreParams, ExploreResponse};
use crate::api::state::AppState;
use crate::catalog::{CATEGORIES, filter_listings};

type SharedState = Arc<AppState>;

/// Filter the sample listings by search term and category
async fn explore(Query(params): Query<ExploreParams>) -> Json<ExploreResponse> {
    let results = filter_listings(params.search.as_deref(), params.category.as_deref());
    tracing::debug!("Explore matched {} listings", results.len());

    Json(ExploreResponse {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        results,
    })
}

/// Create the explore router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(explore))
}
