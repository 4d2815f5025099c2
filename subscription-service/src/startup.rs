//! Application startup and lifecycle management.

use crate::config::SubscriptionConfig;
use crate::handlers;
use crate::services::{init_metrics, Clock, SubscriptionScheduler, SystemClock};
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::security_headers::security_headers_middleware;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: SubscriptionConfig,
    pub scheduler: SubscriptionScheduler,
}

impl AppState {
    pub fn new(config: SubscriptionConfig, clock: Arc<dyn Clock>) -> Self {
        let scheduler = SubscriptionScheduler::new(config.schedule.max_months, clock);
        Self { config, scheduler }
    }
}

/// Build the HTTP router with its middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/subscription", get(handlers::subscription::get_subscription))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration and the system clock.
    pub async fn build(config: SubscriptionConfig) -> Result<Self, AppError> {
        Self::build_with_clock(config, Arc::new(SystemClock)).await
    }

    /// Build the application with an explicit source of "today".
    pub async fn build_with_clock(
        config: SubscriptionConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        init_metrics();

        let http_addr: SocketAddr = config.common.bind_address().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid bind address '{}': {}",
                config.common.bind_address(),
                e
            ))
        })?;
        let http_listener = TcpListener::bind(http_addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %http_addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!(http_port = http_port, "Subscription service listener bound");

        Ok(Self {
            http_port,
            http_listener,
            state: AppState::new(config, clock),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Get the application state.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(
            service = %self.state.config.service_name,
            version = %self.state.config.service_version,
            http_port = self.http_port,
            max_months = self.state.config.schedule.max_months,
            "Service ready to accept connections"
        );

        let router = build_router(self.state);
        axum::serve(self.http_listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            std::io::Error::other(format!("HTTP server error: {}", e))
        })
    }
}
