//! Dash full node context.
//!
//! One [`NodeContext`] is built per process run and passed by reference to
//! every component that needs a sibling subsystem, instead of each subsystem
//! reaching for process-wide globals. The crate provides:
//! - The context itself, with owned and borrowed handles and an ordered
//!   teardown ledger
//! - The interruption point used for cooperative cancellation
//! - Reference startup/shutdown sequencing and service-layer accessors
//! - Configuration, logging and the shutdown controller

pub mod config;
pub mod context;
pub mod error;
pub mod init;
pub mod interruption;
pub mod logging;
pub mod service;
pub mod shutdown;
pub mod teardown;
pub mod tracing_spans;

pub use config::{Network, NodeConfig};
pub use context::NodeContext;
pub use error::NodeError;
pub use init::ExternalHandles;
pub use interruption::InterruptionPoint;
pub use logging::{init_from_config, init_logging, LogFormat};
pub use service::{node_info, node_info_json, NodeInfo};
pub use shutdown::ShutdownController;
pub use teardown::{OwnedSlot, TeardownLedger};
