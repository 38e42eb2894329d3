//! Chain-state tracking and the chain interface handed to chain clients
//! (wallets and other in-process consumers).

use crate::error::InterfaceError;
use crate::scheduler::Scheduler;

/// Tracks the active chain and its block index.
pub trait ChainstateManager: Send + Sync {
    /// Height of the active tip, or `None` before genesis is loaded.
    fn active_height(&self) -> Option<u32>;
}

/// Narrow view of the node that chain clients are allowed to use.
pub trait Chain: Send + Sync {
    fn tip_height(&self) -> Option<u32>;
}

/// Capability interface shared by every client attached to the node
/// (wallet processes and similar).
///
/// The startup routine calls `verify`, `load` and `start` in that order; the
/// shutdown routine calls `flush` and then `stop`.
pub trait ChainClient: Send + Sync {
    /// Check that the client's on-disk state is usable.
    fn verify(&self) -> Result<(), InterfaceError>;

    /// Load the client's state.
    fn load(&self) -> Result<(), InterfaceError>;

    /// Begin background work, scheduling periodic tasks on `scheduler`.
    fn start(&self, scheduler: &dyn Scheduler) -> Result<(), InterfaceError>;

    fn flush(&self);

    fn stop(&self);
}

/// Lets a client owned elsewhere be registered by reference.
impl<T: ChainClient + ?Sized> ChainClient for &T {
    fn verify(&self) -> Result<(), InterfaceError> {
        (**self).verify()
    }

    fn load(&self) -> Result<(), InterfaceError> {
        (**self).load()
    }

    fn start(&self, scheduler: &dyn Scheduler) -> Result<(), InterfaceError> {
        (**self).start(scheduler)
    }

    fn flush(&self) {
        (**self).flush()
    }

    fn stop(&self) {
        (**self).stop()
    }
}

/// The chain client used to load or create wallets on behalf of the user.
pub trait WalletLoader: ChainClient {
    /// Names of the wallets currently loaded.
    fn wallet_names(&self) -> Vec<String>;
}

/// Loader for the privacy-mixing (CoinJoin) client.
pub trait CoinJoinLoader: Send + Sync {
    fn is_mixing(&self) -> bool;
}
