//! Shutdown request fan-out for the Dash node.
//!
//! Listens for SIGINT/SIGTERM and broadcasts a shutdown signal to async
//! subsystems via a `tokio::sync::broadcast` channel. Synchronous code polls
//! the same request through an [`InterruptionPoint`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::broadcast;

use crate::interruption::InterruptionPoint;
use crate::NodeError;

/// Coordinates shutdown requests across all node subsystems.
///
/// Async subsystems call [`subscribe`](Self::subscribe) and `select!` on the
/// receiver alongside their main loop. Service operations running on worker
/// threads use [`interruption_point`](Self::interruption_point), normally
/// installed as the node context's `rpc_interruption_point`.
pub struct ShutdownController {
    tx: broadcast::Sender<()>,
    requested: Arc<AtomicBool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a receiver that will be notified on shutdown.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger shutdown programmatically.
    pub fn shutdown(&self) {
        self.requested.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// An interruption point that fails with [`NodeError::Interrupted`] once
    /// shutdown has been requested. A single atomic load; never blocks.
    pub fn interruption_point(&self) -> InterruptionPoint {
        let requested = Arc::clone(&self.requested);
        InterruptionPoint::new(move || {
            if requested.load(Ordering::SeqCst) {
                Err(NodeError::Interrupted)
            } else {
                Ok(())
            }
        })
    }

    /// Wait for SIGTERM or SIGINT, then trigger shutdown.
    pub async fn wait_for_signal(&self) -> Result<(), NodeError> {
        let ctrl_c = signal::ctrl_c();

        #[cfg(unix)]
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        #[cfg(unix)]
        let terminate = terminate.recv();

        #[cfg(not(unix))]
        let terminate = std::future::pending::<Option<()>>();

        tokio::select! {
            res = ctrl_c => {
                res?;
                tracing::info!("received SIGINT, shutting down");
            }
            _ = terminate => { tracing::info!("received SIGTERM, shutting down"); }
        }

        self.shutdown();
        Ok(())
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}
