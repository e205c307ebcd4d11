use crate::core::AppConfig;

/// Read-only state shared by every handler. Handlers never mutate it,
/// so it is shared through an `Arc` without a lock.
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
