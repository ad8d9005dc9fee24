//! Metrics registration and emission.

use metrics::{counter, describe_counter, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counter of users created since process start.
pub const REGISTERED_USERS: &str = "registered_users_total";

/// Install the Prometheus recorder and describe the service's metrics.
///
/// Telemetry is best-effort: on failure the service keeps running without a
/// recorder and `/metrics` reports unavailable.
pub fn install() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            describe_counter!(REGISTERED_USERS, Unit::Count, "Users created since startup.");
            Some(handle)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to install metrics recorder, continuing without telemetry");
            None
        }
    }
}

/// Record one successful user creation.
pub fn record_user_registered() {
    counter!(REGISTERED_USERS).increment(1);
}
