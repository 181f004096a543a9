//! Handler for the service index.

use axum::Json;
use serde_json::{Value, json};

/// Lists the available endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "POST /analyze - Analyze text sentiment",
            "health": "GET /health - Health check",
            "cache_clear": "POST /cache/clear - Clear cache",
        },
    }))
}
