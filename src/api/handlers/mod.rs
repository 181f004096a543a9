//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analyze;
pub mod cache;
pub mod health;
pub mod index;

pub use analyze::analyze_handler;
pub use cache::clear_cache_handler;
pub use health::health_handler;
pub use index::index_handler;
