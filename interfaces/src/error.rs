use thiserror::Error;

/// Failure reported by a subsystem across its boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterfaceError {
    #[error("{subsystem} is unavailable")]
    Unavailable { subsystem: String },

    #[error("{subsystem} failed: {reason}")]
    Failed { subsystem: String, reason: String },
}

impl InterfaceError {
    pub fn unavailable(subsystem: impl Into<String>) -> Self {
        Self::Unavailable {
            subsystem: subsystem.into(),
        }
    }

    pub fn failed(subsystem: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            subsystem: subsystem.into(),
            reason: reason.into(),
        }
    }

    /// Name of the subsystem that raised the error.
    pub fn subsystem(&self) -> &str {
        match self {
            Self::Unavailable { subsystem } | Self::Failed { subsystem, .. } => subsystem,
        }
    }
}
