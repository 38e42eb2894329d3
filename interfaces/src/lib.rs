//! Boundary traits for every long-lived subsystem a Dash full node starts at
//! boot.
//!
//! Nothing in this crate implements a subsystem. The traits describe only
//! the surface the node context's consumers touch: status reads for the
//! service layer and the interrupt/stop/flush hooks the shutdown routine
//! drives. Every trait is `Send + Sync` because the context is shared
//! read-only across worker threads once startup completes; each
//! implementation is responsible for its own internal synchronization.

pub mod chain;
pub mod error;
pub mod factory;
pub mod masternode;
pub mod mempool;
pub mod net;
pub mod scheduler;

pub use chain::{Chain, ChainClient, ChainstateManager, CoinJoinLoader, WalletLoader};
pub use error::InterfaceError;
pub use factory::SubsystemFactory;
pub use masternode::{
    CoinJoinContext, CreditPoolManager, DeterministicMnManager, DstxManager, EvolutionDb,
    GovernanceManager, MasternodeMetaManager, MasternodeSync, MnhfManager,
    NetFulfilledRequestManager, QuorumContext, SporkManager,
};
pub use mempool::{FeeEstimator, TransactionPool};
pub use net::{AddressBook, BanManager, ConnectionManager, PeerManager};
pub use scheduler::Scheduler;
