//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Spawn the interrupt listener task.
///
/// The first Ctrl+C requests graceful shutdown; later interrupts during the
/// drain are not special-cased.
pub fn spawn_interrupt_listener(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupt received, requesting shutdown");
                shutdown.request();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install interrupt handler");
            }
        }
    })
}
