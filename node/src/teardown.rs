//! Teardown ledger: the order in which owned subsystems were assigned, and
//! therefore the reverse of the order in which they must be released.

use std::fmt;

/// Every slot of the node context that owns its subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnedSlot {
    AddrMan,
    Connman,
    Mempool,
    FeeEstimator,
    PeerMan,
    BanMan,
    Chain,
    ChainClients,
    CoinJoinLoader,
    Scheduler,
    EvoDb,
    CoinJoinContext,
    MnhfManager,
    LlmqContext,
}

impl OwnedSlot {
    pub const ALL: [OwnedSlot; 14] = [
        Self::AddrMan,
        Self::Connman,
        Self::Mempool,
        Self::FeeEstimator,
        Self::PeerMan,
        Self::BanMan,
        Self::Chain,
        Self::ChainClients,
        Self::CoinJoinLoader,
        Self::Scheduler,
        Self::EvoDb,
        Self::CoinJoinContext,
        Self::MnhfManager,
        Self::LlmqContext,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddrMan => "addrman",
            Self::Connman => "connman",
            Self::Mempool => "mempool",
            Self::FeeEstimator => "fee_estimator",
            Self::PeerMan => "peerman",
            Self::BanMan => "banman",
            Self::Chain => "chain",
            Self::ChainClients => "chain_clients",
            Self::CoinJoinLoader => "coinjoin_loader",
            Self::Scheduler => "scheduler",
            Self::EvoDb => "evodb",
            Self::CoinJoinContext => "cj_ctx",
            Self::MnhfManager => "mnhf_manager",
            Self::LlmqContext => "llmq_ctx",
        }
    }
}

impl fmt::Display for OwnedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assignment-ordered list of populated slots.
///
/// Single-handle slots appear at most once; re-recording one moves it to the
/// end, since a re-assigned subsystem was initialised after everything already
/// in the ledger. [`OwnedSlot::ChainClients`] is appended once per registered
/// client, so each client keeps its own position.
#[derive(Debug, Default)]
pub struct TeardownLedger {
    order: Vec<OwnedSlot>,
}

impl TeardownLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, slot: OwnedSlot) {
        self.forget(slot);
        self.order.push(slot);
    }

    /// Append `slot` without removing earlier entries for it.
    pub fn append(&mut self, slot: OwnedSlot) {
        self.order.push(slot);
    }

    /// Drop every entry for `slot`. Returns whether any was present.
    pub fn forget(&mut self, slot: OwnedSlot) -> bool {
        let before = self.order.len();
        self.order.retain(|s| *s != slot);
        self.order.len() != before
    }

    /// Remove and return the most recently recorded slot.
    pub fn pop_latest(&mut self) -> Option<OwnedSlot> {
        self.order.pop()
    }

    pub fn contains(&self, slot: OwnedSlot) -> bool {
        self.order.contains(&slot)
    }

    /// Slots in assignment order.
    pub fn order(&self) -> &[OwnedSlot] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
