//! Public types for the explore API
use serde::{Deserialize, Serialize};

use crate::catalog::Listing;

#[derive(Deserialize)]
pub struct ExploreParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ExploreResponse {
    pub categories: Vec<String>,
    pub results: Vec<Listing>,
}
