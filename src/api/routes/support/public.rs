//! Public types for the support API
use serde::{Deserialize, Serialize};

use crate::catalog::Faq;

#[derive(Serialize, Deserialize)]
pub struct FaqResponse {
    pub faqs: Vec<Faq>,
}
