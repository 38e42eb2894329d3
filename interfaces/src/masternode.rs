//! Dash-specific subsystems: evolution database, quorums, masternodes,
//! governance and sporks.

/// Database backing special transactions and the masternode list.
pub trait EvolutionDb: Send + Sync {}

/// Tracks hard-fork signalling by masternodes.
pub trait MnhfManager: Send + Sync {}

/// Long-living masternode quorum (LLMQ) context.
///
/// Reads from the chain-state manager and the transaction pool, so it has to
/// be released before either of them.
pub trait QuorumContext: Send + Sync {
    fn interrupt(&self);
}

/// CoinJoin server/queue state.
pub trait CoinJoinContext: Send + Sync {}

pub trait CreditPoolManager: Send + Sync {}

/// Deterministic masternode list.
pub trait DeterministicMnManager: Send + Sync {
    fn masternode_count(&self) -> usize;
}

/// Tracks CoinJoin broadcast transactions.
pub trait DstxManager: Send + Sync {}

pub trait GovernanceManager: Send + Sync {
    /// Number of governance objects (proposals and triggers) known.
    fn object_count(&self) -> usize;
}

pub trait MasternodeMetaManager: Send + Sync {}

pub trait MasternodeSync: Send + Sync {
    fn is_blockchain_synced(&self) -> bool;

    fn is_synced(&self) -> bool;
}

/// Remembers which peer requests were already fulfilled.
pub trait NetFulfilledRequestManager: Send + Sync {}

pub trait SporkManager: Send + Sync {}
