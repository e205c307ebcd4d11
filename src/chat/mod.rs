//! The chat proxy between the site's chat widget and the completion
//! provider.

mod error;
mod proxy;

pub use error::ProxyError;
pub use proxy::{ChatReply, parse_messages, relay, validate_api_key};
