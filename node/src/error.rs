use dash_interfaces::InterfaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    /// Raised by an interruption point once shutdown has been requested.
    #[error("operation interrupted: node is shutting down")]
    Interrupted,

    /// A handle the caller needs is absent from the node context.
    #[error("{0} disabled or instance not found")]
    Disabled(&'static str),

    #[error("subsystem error: {0}")]
    Subsystem(#[from] InterfaceError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
