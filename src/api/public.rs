//! Public API types

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod explore {
    pub use crate::api::routes::explore::public::*;
}

pub mod support {
    pub use crate::api::routes::support::public::*;
}
