//! Shared application state.

use std::sync::Arc;

use crate::application::services::AnalysisService;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(analysis_service: Arc<AnalysisService>) -> Self {
        Self { analysis_service }
    }
}
