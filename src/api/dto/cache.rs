//! DTOs for cache administration endpoints.

use serde::Serialize;

/// Response for a successful cache clear.
#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
    /// Number of cached analyses removed.
    pub removed: u64,
}
