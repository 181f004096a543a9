//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, inference client construction, and Axum server lifecycle.

use crate::application::services::AnalysisService;
use crate::config::{Config, mask_connection_string};
use crate::domain::SentimentClassifier;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::inference::OllamaClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the configured cache.
///
/// [`NullCache`] is used only when Redis is not configured or caching is
/// disabled. A configured Redis that is down at startup still gets a
/// [`RedisCache`]: it reports unhealthy and reconnects on later calls.
///
/// # Errors
///
/// Returns an error if the Redis URL is invalid.
pub async fn build_cache(config: &Config) -> Result<Arc<dyn CacheService>> {
    let Some(redis_url) = config
        .redis_url
        .as_deref()
        .filter(|_| config.is_cache_enabled())
    else {
        tracing::info!("Cache disabled (NullCache)");
        return Ok(Arc::new(NullCache::new()));
    };

    let redis = RedisCache::new(redis_url, config.cache_ttl_seconds)
        .context("Invalid Redis configuration")?;

    if redis.health_check().await {
        tracing::info!("Cache enabled (Redis)");
    } else {
        tracing::warn!(
            "Redis not reachable at {}; serving without cache until it is up",
            mask_connection_string(redis_url)
        );
    }

    Ok(Arc::new(redis))
}

/// Builds the analysis service from configuration.
///
/// # Errors
///
/// Returns an error if the inference HTTP client cannot be created.
pub async fn build_analysis_service(config: &Config) -> Result<AnalysisService> {
    let cache = build_cache(config).await?;

    let classifier: Arc<dyn SentimentClassifier> = Arc::new(
        OllamaClient::new(&config.ollama_base_url, config.ollama_request_timeout)
            .context("Failed to create Ollama client")?,
    );

    Ok(AnalysisService::new(
        classifier,
        cache,
        config.ollama_model.clone(),
        config.cache_ttl_seconds,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (NullCache when caching is not configured)
/// - Ollama inference client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The inference client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let analysis_service = build_analysis_service(&config).await?;

    if analysis_service.classifier_healthy().await {
        tracing::info!("Ollama reachable at {}", config.ollama_base_url);
    } else {
        tracing::warn!(
            "Ollama not reachable at {}; analysis requests will fail until it is up",
            config.ollama_base_url
        );
    }

    let state = AppState::new(Arc::new(analysis_service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
