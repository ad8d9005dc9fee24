//! HTTP server setup and serve loop.
//!
//! # Responsibilities
//! - Create the Axum router with the user routes and `/metrics`
//! - Wire up middleware (timeouts, tracing, content type)
//! - Serve on a bound listener until a terminal error or shutdown
//! - Bounded drain of in-flight requests after a shutdown request

use std::future::IntoFuture;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::middleware::content_type;
use crate::lifecycle::Shutdown;
use crate::users::{handlers, UserRepository};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<UserRepository>,
    pub metrics: Option<PrometheusHandle>,
}

/// HTTP server for the user service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and repository
    /// handle.
    pub fn new(
        config: ServiceConfig,
        repo: Arc<UserRepository>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        let state = AppState { repo, metrics };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The content-type middleware wraps only the resource routes;
    /// `/metrics` keeps the exposition format its recorder produces.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let users = Router::new()
            .route(
                "/users",
                get(handlers::list_users).post(handlers::create_user),
            )
            .route(
                "/users/{id}",
                get(handlers::get_user).delete(handlers::delete_user),
            )
            .layer(middleware::from_fn(content_type::enforce_json));

        Router::new()
            .merge(users)
            .route("/metrics", get(render_metrics))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyTimeoutLayer::new(Duration::from_secs(
                config.timeouts.read_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on the given listener until the serve loop reports a terminal
    /// error or shutdown is requested.
    ///
    /// After a shutdown request, in-flight requests get a bounded drain
    /// window; anything still running past it is abandoned.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let drain = Duration::from_secs(self.config.shutdown.drain_secs);

        tracing::info!(address = %addr, "HTTP server starting");

        let graceful = {
            let shutdown = shutdown.clone();
            async move { shutdown.requested().await }
        };
        let mut serve = pin!(axum::serve(listener, self.router)
            .with_graceful_shutdown(graceful)
            .into_future());

        tokio::select! {
            // The serve loop ended on its own: a terminal error, or shutdown
            // with nothing left in flight.
            result = &mut serve => result?,
            _ = shutdown.requested() => {
                tracing::info!(drain_secs = drain.as_secs(), "shutdown requested, draining in-flight requests");
                match tokio::time::timeout(drain, &mut serve).await {
                    Ok(result) => result?,
                    Err(_) => {
                        tracing::warn!("drain deadline elapsed, abandoning in-flight requests");
                    }
                }
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /metrics`: Prometheus exposition, owned by the recorder.
async fn render_metrics(State(state): State<AppState>) -> axum::response::Response {
    match state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder unavailable").into_response(),
    }
}
