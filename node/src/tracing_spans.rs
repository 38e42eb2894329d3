//! Pre-built [`tracing::Span`] constructors for node-context lifecycle events.
//!
//! Using consistent span names and field sets makes startup and shutdown
//! traces easy to filter and correlate.

use tracing::{debug_span, info_span, Span};

/// Span covering the whole startup sequence that populates the context.
pub fn startup_span(network: &str) -> Span {
    info_span!("startup", network = %network)
}

/// Span covering the shutdown sequence, up to and including teardown.
pub fn shutdown_span() -> Span {
    info_span!("shutdown")
}

/// Span covering the assignment of one owned subsystem into the context.
pub fn install_span(slot: &str) -> Span {
    debug_span!("node_context_install", slot = %slot)
}

/// Span covering the release of every owned subsystem.
pub fn teardown_span(slots: usize) -> Span {
    debug_span!("node_context_teardown", slots = %slots)
}

/// Span covering a single service-layer command.
pub fn service_span(command: &str) -> Span {
    info_span!("service", command = %command)
}
