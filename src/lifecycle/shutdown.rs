//! Shutdown coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Single-shot coordinator for graceful shutdown.
///
/// Long-running tasks wait on [`requested`](Self::requested); the first
/// [`request`](Self::request) wins and later ones are reported as redundant.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    requested: Arc<AtomicBool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request shutdown. Returns `true` only for the first request in the
    /// process lifetime; repeated requests are no-ops.
    pub fn request(&self) -> bool {
        if self.requested.swap(true, Ordering::SeqCst) {
            return false;
        }
        let _ = self.tx.send(());
        true
    }

    /// Whether shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Wait until shutdown has been requested.
    ///
    /// Resolves immediately when the request already happened, so late
    /// waiters cannot miss the signal.
    pub async fn requested(&self) {
        let mut rx = self.tx.subscribe();
        if self.is_requested() {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_request_wins() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_requested());
        assert!(shutdown.request());
        assert!(!shutdown.request());
        assert!(shutdown.is_requested());
    }

    #[test]
    fn clones_share_the_single_shot_latch() {
        let shutdown = Shutdown::new();
        let clone = shutdown.clone();
        assert!(clone.request());
        assert!(!shutdown.request());
    }

    #[tokio::test]
    async fn waiters_observe_the_signal() {
        let shutdown = Shutdown::new();
        let waiter = {
            let shutdown = shutdown.clone();
            tokio::spawn(async move { shutdown.requested().await })
        };
        assert!(shutdown.request());
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn late_waiters_resolve_immediately() {
        let shutdown = Shutdown::new();
        assert!(shutdown.request());
        shutdown.requested().await;
    }
}
