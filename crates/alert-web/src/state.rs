//! Application state shared across handlers.

use std::sync::Arc;

use nearby_alert::AlertChecker;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<AlertChecker>,
}

impl AppState {
    pub fn new(checker: AlertChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}
