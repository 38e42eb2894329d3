//! Nullable infrastructure for deterministic testing.
//!
//! Every subsystem boundary from `dash-interfaces` gets a stand-in here that:
//! - Returns canned values that tests can configure
//! - Records each hook it receives (interrupt, stop, flush, ...) and its own
//!   release into a shared [`EventLog`]
//! - Never touches the filesystem or network
//!
//! Usage: build the stand-ins against one log, hand them to a node context,
//! then assert on the order of recorded events.

pub mod chain_client;
pub mod event_log;
pub mod factory;
pub mod subsystem;

pub use chain_client::{ClientStage, NullChainClient};
pub use event_log::{Event, EventLog, RELEASED};
pub use factory::{NullFactory, BUILT};
pub use subsystem::NullSubsystem;
