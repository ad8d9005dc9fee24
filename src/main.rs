use std::path::Path;
use std::sync::Arc;

use user_service::config::{self, ServiceConfig};
use user_service::http::HttpServer;
use user_service::lifecycle::{signals, startup, Shutdown};
use user_service::observability::{logging, metrics};
use user_service::users::UserRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: path to a TOML config file.
    let mut config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability);
    config::apply_env_overrides(&mut config);

    tracing::info!("user-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        read_timeout_secs = config.timeouts.read_secs,
        request_timeout_secs = config.timeouts.request_secs,
        drain_secs = config.shutdown.drain_secs,
        "configuration loaded"
    );

    let metrics_handle = if config.observability.metrics_enabled {
        metrics::install()
    } else {
        None
    };

    let repo = Arc::new(UserRepository::new());

    // First interrupt requests cancellation; the serve loop drains and exits.
    let shutdown = Shutdown::new();
    signals::spawn_interrupt_listener(shutdown.clone());

    // A bind failure is fatal: no shutdown sequence runs, there is nothing
    // to drain yet.
    let listener = startup::bind(&config.listener).await?;

    let server = HttpServer::new(config, repo, metrics_handle);
    server.run(listener, shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
