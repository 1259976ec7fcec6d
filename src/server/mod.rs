//! Suggestion HTTP service
//!
//! Routes:
//! - `POST /api/suggestions/similar`: rank existing items against free text
//! - `POST /api/suggestions/category`: keyword-based category guess
//! - `GET /health`
//!
//! The service is stateless per request. `AppState` only shares the
//! read-only `SuggestionService` (config + catalog) between requests.

pub mod dto;
pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use taskhint_core::config::{ServerConfig, ServiceConfig};
use taskhint_core::error::{Result, SuggestError};
use taskhint_core::service::SuggestionService;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SuggestionService>,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(service: SuggestionService) -> Self {
        let request_timeout = Duration::from_millis(service.config().server.request_timeout_ms);
        Self {
            service: Arc::new(service),
            request_timeout,
        }
    }

    /// Run CPU-bound work off the async workers, bounded by the request timeout.
    ///
    /// A timeout or a panic inside `work` becomes an internal error.
    pub async fn run_blocking<F, T>(&self, work: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        match tokio::time::timeout(self.request_timeout, tokio::task::spawn_blocking(work)).await
        {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(join_error)) => Err(SuggestError::Internal(join_error.to_string())),
            Err(_) => Err(SuggestError::Internal(format!(
                "ranking exceeded {:?}",
                self.request_timeout
            ))),
        }
    }
}

/// Build the CORS layer; an empty origin list allows any origin
fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.cors_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| SuggestError::invalid_value("server.cors_origins", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

/// Build the application router
pub fn router(state: AppState) -> Result<Router> {
    let server_config = &state.service.config().server;
    let cors = cors_layer(server_config)?;
    let body_limit = DefaultBodyLimit::max(server_config.max_body_bytes);

    Ok(Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/suggestions/similar", post(handlers::similar_tasks))
        .route("/api/suggestions/category", post(handlers::suggest_category))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Bind `addr` and serve until Ctrl-C / SIGTERM
pub async fn serve(config: ServiceConfig, addr: &str) -> Result<()> {
    let address: SocketAddr = addr
        .parse()
        .map_err(|_| SuggestError::invalid_value("bind address", addr))?;

    let service = SuggestionService::from_config(config)?;
    let application = router(AppState::new(service))?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| SuggestError::failed(&format!("bind {}", address), e))?;

    match listener.local_addr() {
        Ok(address) => tracing::info!("Listening on {}", address),
        Err(error) => tracing::warn!(%error, "Could not determine local address"),
    }

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SuggestError::failed("serve HTTP", e))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
