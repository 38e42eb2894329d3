//! Construction seam used by the startup routine.

use crate::chain::{Chain, ChainClient, CoinJoinLoader};
use crate::error::InterfaceError;
use crate::masternode::{CoinJoinContext, EvolutionDb, MnhfManager, QuorumContext};
use crate::mempool::{FeeEstimator, TransactionPool};
use crate::net::{AddressBook, BanManager, ConnectionManager, PeerManager};
use crate::scheduler::Scheduler;

/// Builds each subsystem the node context owns exclusively.
///
/// The startup routine decides which constructors to call and in which
/// order; a factory only knows how to build one subsystem at a time. `'a`
/// is the lifetime of the externally owned subsystems a built value may
/// borrow.
pub trait SubsystemFactory<'a> {
    fn scheduler(&self) -> Result<Box<dyn Scheduler + 'a>, InterfaceError>;

    fn address_book(&self) -> Result<Box<dyn AddressBook + 'a>, InterfaceError>;

    fn ban_manager(&self) -> Result<Box<dyn BanManager + 'a>, InterfaceError>;

    fn connection_manager(&self) -> Result<Box<dyn ConnectionManager + 'a>, InterfaceError>;

    fn fee_estimator(&self) -> Result<Box<dyn FeeEstimator + 'a>, InterfaceError>;

    fn transaction_pool(&self) -> Result<Box<dyn TransactionPool + 'a>, InterfaceError>;

    fn evolution_db(&self) -> Result<Box<dyn EvolutionDb + 'a>, InterfaceError>;

    fn mnhf_manager(&self) -> Result<Box<dyn MnhfManager + 'a>, InterfaceError>;

    fn quorum_context(&self) -> Result<Box<dyn QuorumContext + 'a>, InterfaceError>;

    fn coinjoin_context(&self) -> Result<Box<dyn CoinJoinContext + 'a>, InterfaceError>;

    fn peer_manager(&self) -> Result<Box<dyn PeerManager + 'a>, InterfaceError>;

    fn chain(&self) -> Result<Box<dyn Chain + 'a>, InterfaceError>;

    /// Clients to register, in registration order.
    fn chain_clients(&self) -> Result<Vec<Box<dyn ChainClient + 'a>>, InterfaceError>;

    fn coinjoin_loader(&self) -> Result<Box<dyn CoinJoinLoader + 'a>, InterfaceError>;
}
