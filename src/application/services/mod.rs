//! Business logic services for the application layer.

pub mod analysis_service;

pub use analysis_service::{AnalysisService, MAX_TEXT_CHARS};
