//! Cooperative cancellation check for long-running service operations.

use std::fmt;
use std::sync::Arc;

use crate::NodeError;

type CheckFn = dyn Fn() -> Result<(), NodeError> + Send + Sync;

/// A replaceable cancellation check that is always callable.
///
/// Long-running operations call [`check`](Self::check) at safe points and
/// bail out with the returned error. The default check does nothing and
/// always succeeds, so call sites never test for presence first. Checks are
/// invoked from arbitrary worker threads and must return without blocking.
#[derive(Clone)]
pub struct InterruptionPoint {
    check: Arc<CheckFn>,
}

impl InterruptionPoint {
    /// A check that never interrupts.
    pub fn noop() -> Self {
        Self {
            check: Arc::new(|| Ok(())),
        }
    }

    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> Result<(), NodeError> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Run the check. `Err` means the caller should stop what it is doing.
    pub fn check(&self) -> Result<(), NodeError> {
        (self.check)()
    }
}

impl Default for InterruptionPoint {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for InterruptionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterruptionPoint").finish_non_exhaustive()
    }
}
