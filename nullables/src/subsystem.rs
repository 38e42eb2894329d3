//! Nullable subsystem — one recorder that stands in for every boundary.

use dash_interfaces::{
    AddressBook, BanManager, Chain, ChainstateManager, CoinJoinContext, CoinJoinLoader,
    ConnectionManager, CreditPoolManager, DeterministicMnManager, DstxManager, EvolutionDb,
    FeeEstimator, GovernanceManager, MasternodeMetaManager, MasternodeSync, MnhfManager,
    NetFulfilledRequestManager, PeerManager, QuorumContext, Scheduler, SporkManager,
    TransactionPool,
};

use crate::event_log::{EventLog, RELEASED};

/// A recording stand-in for any node subsystem.
///
/// Status reads return the canned values set with the `with_*` builders.
/// Lifecycle hooks are appended to the shared [`EventLog`] under this
/// subsystem's name, and dropping the value records [`RELEASED`].
pub struct NullSubsystem {
    name: String,
    log: EventLog,
    size: usize,
    height: Option<u32>,
    synced: bool,
}

impl NullSubsystem {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            size: 0,
            height: None,
            synced: false,
        }
    }

    /// Shorthand for `Box::new(NullSubsystem::new(..))`, ready to coerce into
    /// any `Box<dyn Trait>` slot.
    pub fn boxed(name: &str, log: &EventLog) -> Box<Self> {
        Box::new(Self::new(name, log))
    }

    /// Value returned by every count/size query.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Value returned by height queries.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_synced(mut self, synced: bool) -> Self {
        self.synced = synced;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn record(&self, action: &'static str) {
        self.log.record(&self.name, action);
    }
}

impl Drop for NullSubsystem {
    fn drop(&mut self) {
        self.log.record(&self.name, RELEASED);
    }
}

impl AddressBook for NullSubsystem {
    fn size(&self) -> usize {
        self.size
    }
}

impl ConnectionManager for NullSubsystem {
    fn node_count(&self) -> usize {
        self.size
    }

    fn interrupt(&self) {
        self.record("interrupt");
    }

    fn stop(&self) {
        self.record("stop");
    }
}

impl PeerManager for NullSubsystem {
    fn interrupt(&self) {
        self.record("interrupt");
    }
}

impl BanManager for NullSubsystem {
    fn banned_count(&self) -> usize {
        self.size
    }

    fn dump(&self) {
        self.record("dump");
    }
}

impl TransactionPool for NullSubsystem {
    fn size(&self) -> usize {
        self.size
    }

    fn total_bytes(&self) -> usize {
        self.size * 250
    }
}

impl FeeEstimator for NullSubsystem {
    fn flush(&self) {
        self.record("flush");
    }
}

impl Scheduler for NullSubsystem {
    fn pending_tasks(&self) -> usize {
        self.size
    }

    fn stop(&self) {
        self.record("stop");
    }
}

impl ChainstateManager for NullSubsystem {
    fn active_height(&self) -> Option<u32> {
        self.height
    }
}

impl Chain for NullSubsystem {
    fn tip_height(&self) -> Option<u32> {
        self.height
    }
}

impl CoinJoinLoader for NullSubsystem {
    fn is_mixing(&self) -> bool {
        self.synced
    }
}

impl QuorumContext for NullSubsystem {
    fn interrupt(&self) {
        self.record("interrupt");
    }
}

impl DeterministicMnManager for NullSubsystem {
    fn masternode_count(&self) -> usize {
        self.size
    }
}

impl GovernanceManager for NullSubsystem {
    fn object_count(&self) -> usize {
        self.size
    }
}

impl MasternodeSync for NullSubsystem {
    fn is_blockchain_synced(&self) -> bool {
        self.synced
    }

    fn is_synced(&self) -> bool {
        self.synced
    }
}

impl EvolutionDb for NullSubsystem {}
impl MnhfManager for NullSubsystem {}
impl CoinJoinContext for NullSubsystem {}
impl CreditPoolManager for NullSubsystem {}
impl DstxManager for NullSubsystem {}
impl MasternodeMetaManager for NullSubsystem {}
impl NetFulfilledRequestManager for NullSubsystem {}
impl SporkManager for NullSubsystem {}
