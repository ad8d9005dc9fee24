//! Shared utilities for integration testing.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::task::JoinHandle;
use user_service::config::ServiceConfig;
use user_service::observability::metrics;
use user_service::{HttpServer, Shutdown, UserRepository};

static RECORDER: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the process-global Prometheus recorder once and hand out clones
/// of its handle. Tests in this binary share one recorder.
pub fn metrics_handle() -> Option<PrometheusHandle> {
    RECORDER.get_or_init(metrics::install).clone()
}

/// Spawn a service instance on the given port with an isolated repository.
///
/// Returns the shutdown handle and the serve task.
pub async fn spawn_server(
    port: u16,
    mut config: ServiceConfig,
) -> (Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    config.listener.bind_address = format!("127.0.0.1:{port}");

    let repo = Arc::new(UserRepository::new());
    let shutdown = Shutdown::new();
    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let server = HttpServer::new(config, repo, metrics_handle());

    let task = tokio::spawn(server.run(listener, shutdown.clone()));

    // Let the serve loop start accepting.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (shutdown, task)
}
