//! The node context: one value holding a handle to every long-lived
//! subsystem, built once at startup and passed by reference to everything
//! that needs a sibling.
//!
//! Handles come in three kinds:
//! - **Owned** (`Box<dyn Trait + 'a>`): the context is the only owner. These
//!   are private and written through `set_*`, so every assignment is recorded
//!   in the [`TeardownLedger`]. Teardown releases them in reverse assignment
//!   order, independent of field declaration order.
//! - **Borrowed** (`Option<&'a dyn Trait>`): owned elsewhere. Public fields;
//!   the context never releases them and the borrow checker keeps the owner
//!   alive for as long as the context.
//! - **Behavioral**: [`InterruptionPoint`], always callable.
//!
//! Absence of any handle means "not started or disabled"; the context does
//! not distinguish the two. It performs no locking: populate it on one thread
//! before sharing `&NodeContext`, and tear it down after every reader has
//! been joined.

use std::fmt;

use tracing::{debug, info};

use dash_interfaces::{
    AddressBook, BanManager, Chain, ChainClient, ChainstateManager, CoinJoinContext,
    CoinJoinLoader, ConnectionManager, CreditPoolManager, DeterministicMnManager, DstxManager,
    EvolutionDb, FeeEstimator, GovernanceManager, MasternodeMetaManager, MasternodeSync,
    MnhfManager, NetFulfilledRequestManager, PeerManager, QuorumContext, Scheduler, SporkManager,
    TransactionPool, WalletLoader,
};

use crate::config::NodeConfig;
use crate::interruption::InterruptionPoint;
use crate::teardown::{OwnedSlot, TeardownLedger};
use crate::tracing_spans::teardown_span;

/// Handles to every subsystem of a running node.
///
/// `'a` is the lifetime of the externally owned subsystems referenced by the
/// borrowed fields (and of anything the owned subsystems themselves borrow).
pub struct NodeContext<'a> {
    addrman: Option<Box<dyn AddressBook + 'a>>,
    connman: Option<Box<dyn ConnectionManager + 'a>>,
    mempool: Option<Box<dyn TransactionPool + 'a>>,
    fee_estimator: Option<Box<dyn FeeEstimator + 'a>>,
    peerman: Option<Box<dyn PeerManager + 'a>>,
    banman: Option<Box<dyn BanManager + 'a>>,
    chain: Option<Box<dyn Chain + 'a>>,
    /// Wallet processes and other clients, in registration order.
    chain_clients: Vec<Box<dyn ChainClient + 'a>>,
    coinjoin_loader: Option<Box<dyn CoinJoinLoader + 'a>>,
    scheduler: Option<Box<dyn Scheduler + 'a>>,
    evodb: Option<Box<dyn EvolutionDb + 'a>>,
    cj_ctx: Option<Box<dyn CoinJoinContext + 'a>>,
    mnhf_manager: Option<Box<dyn MnhfManager + 'a>>,
    llmq_ctx: Option<Box<dyn QuorumContext + 'a>>,

    pub chainman: Option<&'a dyn ChainstateManager>,
    pub args: Option<&'a NodeConfig>,
    /// Chain client used to load or create wallets on the user's behalf.
    pub wallet_loader: Option<&'a dyn WalletLoader>,
    pub cpoolman: Option<&'a dyn CreditPoolManager>,
    pub dmnman: Option<&'a dyn DeterministicMnManager>,
    pub dstxman: Option<&'a dyn DstxManager>,
    pub govman: Option<&'a dyn GovernanceManager>,
    pub mn_metaman: Option<&'a dyn MasternodeMetaManager>,
    pub mn_sync: Option<&'a dyn MasternodeSync>,
    pub netfulfilledman: Option<&'a dyn NetFulfilledRequestManager>,
    pub sporkman: Option<&'a dyn SporkManager>,

    /// Checked by long-running service operations; no-op unless replaced.
    pub rpc_interruption_point: InterruptionPoint,

    ledger: TeardownLedger,
    torn_down: bool,
}

impl<'a> NodeContext<'a> {
    /// An empty context: no owned or borrowed handles, no clients, and a
    /// no-op interruption point.
    pub fn new() -> Self {
        Self {
            addrman: None,
            connman: None,
            mempool: None,
            fee_estimator: None,
            peerman: None,
            banman: None,
            chain: None,
            chain_clients: Vec::new(),
            coinjoin_loader: None,
            scheduler: None,
            evodb: None,
            cj_ctx: None,
            mnhf_manager: None,
            llmq_ctx: None,
            chainman: None,
            args: None,
            wallet_loader: None,
            cpoolman: None,
            dmnman: None,
            dstxman: None,
            govman: None,
            mn_metaman: None,
            mn_sync: None,
            netfulfilledman: None,
            sporkman: None,
            rpc_interruption_point: InterruptionPoint::noop(),
            ledger: TeardownLedger::new(),
            torn_down: false,
        }
    }

    // ── Owned handles: getters ─────────────────────────────────────────

    pub fn addrman(&self) -> Option<&(dyn AddressBook + 'a)> {
        self.addrman.as_deref()
    }

    pub fn connman(&self) -> Option<&(dyn ConnectionManager + 'a)> {
        self.connman.as_deref()
    }

    pub fn mempool(&self) -> Option<&(dyn TransactionPool + 'a)> {
        self.mempool.as_deref()
    }

    pub fn fee_estimator(&self) -> Option<&(dyn FeeEstimator + 'a)> {
        self.fee_estimator.as_deref()
    }

    pub fn peerman(&self) -> Option<&(dyn PeerManager + 'a)> {
        self.peerman.as_deref()
    }

    pub fn banman(&self) -> Option<&(dyn BanManager + 'a)> {
        self.banman.as_deref()
    }

    pub fn chain(&self) -> Option<&(dyn Chain + 'a)> {
        self.chain.as_deref()
    }

    /// Registered clients, in registration order.
    pub fn chain_clients(&self) -> &[Box<dyn ChainClient + 'a>] {
        &self.chain_clients
    }

    pub fn coinjoin_loader(&self) -> Option<&(dyn CoinJoinLoader + 'a)> {
        self.coinjoin_loader.as_deref()
    }

    pub fn scheduler(&self) -> Option<&(dyn Scheduler + 'a)> {
        self.scheduler.as_deref()
    }

    pub fn evodb(&self) -> Option<&(dyn EvolutionDb + 'a)> {
        self.evodb.as_deref()
    }

    pub fn cj_ctx(&self) -> Option<&(dyn CoinJoinContext + 'a)> {
        self.cj_ctx.as_deref()
    }

    pub fn mnhf_manager(&self) -> Option<&(dyn MnhfManager + 'a)> {
        self.mnhf_manager.as_deref()
    }

    pub fn llmq_ctx(&self) -> Option<&(dyn QuorumContext + 'a)> {
        self.llmq_ctx.as_deref()
    }

    // ── Owned handles: assignment ──────────────────────────────────────
    //
    // Assigning over an occupied slot releases the previous subsystem first.

    pub fn set_addrman(&mut self, addrman: Box<dyn AddressBook + 'a>) {
        self.release(OwnedSlot::AddrMan);
        self.addrman = Some(addrman);
        self.record_install(OwnedSlot::AddrMan);
    }

    pub fn set_connman(&mut self, connman: Box<dyn ConnectionManager + 'a>) {
        self.release(OwnedSlot::Connman);
        self.connman = Some(connman);
        self.record_install(OwnedSlot::Connman);
    }

    pub fn set_mempool(&mut self, mempool: Box<dyn TransactionPool + 'a>) {
        self.release(OwnedSlot::Mempool);
        self.mempool = Some(mempool);
        self.record_install(OwnedSlot::Mempool);
    }

    pub fn set_fee_estimator(&mut self, fee_estimator: Box<dyn FeeEstimator + 'a>) {
        self.release(OwnedSlot::FeeEstimator);
        self.fee_estimator = Some(fee_estimator);
        self.record_install(OwnedSlot::FeeEstimator);
    }

    pub fn set_peerman(&mut self, peerman: Box<dyn PeerManager + 'a>) {
        self.release(OwnedSlot::PeerMan);
        self.peerman = Some(peerman);
        self.record_install(OwnedSlot::PeerMan);
    }

    pub fn set_banman(&mut self, banman: Box<dyn BanManager + 'a>) {
        self.release(OwnedSlot::BanMan);
        self.banman = Some(banman);
        self.record_install(OwnedSlot::BanMan);
    }

    pub fn set_chain(&mut self, chain: Box<dyn Chain + 'a>) {
        self.release(OwnedSlot::Chain);
        self.chain = Some(chain);
        self.record_install(OwnedSlot::Chain);
    }

    /// Append a client. Each client takes its own place in the teardown
    /// ledger, so it is released before anything installed ahead of it and
    /// after anything installed later.
    pub fn add_chain_client(&mut self, client: Box<dyn ChainClient + 'a>) {
        debug_assert!(
            !self.torn_down,
            "chain client added to a node context that was already torn down"
        );
        self.chain_clients.push(client);
        self.ledger.append(OwnedSlot::ChainClients);
        debug!(
            clients = self.chain_clients.len(),
            position = self.ledger.len(),
            "chain client registered"
        );
    }

    pub fn set_coinjoin_loader(&mut self, loader: Box<dyn CoinJoinLoader + 'a>) {
        self.release(OwnedSlot::CoinJoinLoader);
        self.coinjoin_loader = Some(loader);
        self.record_install(OwnedSlot::CoinJoinLoader);
    }

    pub fn set_scheduler(&mut self, scheduler: Box<dyn Scheduler + 'a>) {
        self.release(OwnedSlot::Scheduler);
        self.scheduler = Some(scheduler);
        self.record_install(OwnedSlot::Scheduler);
    }

    pub fn set_evodb(&mut self, evodb: Box<dyn EvolutionDb + 'a>) {
        self.release(OwnedSlot::EvoDb);
        self.evodb = Some(evodb);
        self.record_install(OwnedSlot::EvoDb);
    }

    pub fn set_cj_ctx(&mut self, cj_ctx: Box<dyn CoinJoinContext + 'a>) {
        self.release(OwnedSlot::CoinJoinContext);
        self.cj_ctx = Some(cj_ctx);
        self.record_install(OwnedSlot::CoinJoinContext);
    }

    pub fn set_mnhf_manager(&mut self, mnhf_manager: Box<dyn MnhfManager + 'a>) {
        self.release(OwnedSlot::MnhfManager);
        self.mnhf_manager = Some(mnhf_manager);
        self.record_install(OwnedSlot::MnhfManager);
    }

    pub fn set_llmq_ctx(&mut self, llmq_ctx: Box<dyn QuorumContext + 'a>) {
        self.release(OwnedSlot::LlmqContext);
        self.llmq_ctx = Some(llmq_ctx);
        self.record_install(OwnedSlot::LlmqContext);
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Release one owned slot now. Returns whether anything was released.
    ///
    /// A released slot is removed from the ledger, so teardown will not
    /// touch it again. [`OwnedSlot::ChainClients`] releases every client,
    /// newest first.
    pub fn release(&mut self, slot: OwnedSlot) -> bool {
        let released = match slot {
            OwnedSlot::AddrMan => drop_slot(&mut self.addrman),
            OwnedSlot::Connman => drop_slot(&mut self.connman),
            OwnedSlot::Mempool => drop_slot(&mut self.mempool),
            OwnedSlot::FeeEstimator => drop_slot(&mut self.fee_estimator),
            OwnedSlot::PeerMan => drop_slot(&mut self.peerman),
            OwnedSlot::BanMan => drop_slot(&mut self.banman),
            OwnedSlot::Chain => drop_slot(&mut self.chain),
            OwnedSlot::ChainClients => {
                let count = self.chain_clients.len();
                while let Some(client) = self.chain_clients.pop() {
                    drop(client);
                }
                count > 0
            }
            OwnedSlot::CoinJoinLoader => drop_slot(&mut self.coinjoin_loader),
            OwnedSlot::Scheduler => drop_slot(&mut self.scheduler),
            OwnedSlot::EvoDb => drop_slot(&mut self.evodb),
            OwnedSlot::CoinJoinContext => drop_slot(&mut self.cj_ctx),
            OwnedSlot::MnhfManager => drop_slot(&mut self.mnhf_manager),
            OwnedSlot::LlmqContext => drop_slot(&mut self.llmq_ctx),
        };
        self.ledger.forget(slot);
        if released {
            debug!(slot = %slot, "released");
        }
        released
    }

    /// Release every owned subsystem, newest first. Borrowed handles are left
    /// alone. Idempotent; also run on drop.
    pub fn teardown(&mut self) {
        if !self.ledger.is_empty() {
            let _span = teardown_span(self.ledger.len()).entered();
            while let Some(slot) = self.ledger.pop_latest() {
                match slot {
                    OwnedSlot::ChainClients => self.release_latest_client(),
                    other => {
                        self.release(other);
                    }
                }
            }
            info!("node context torn down");
        }
        self.torn_down = true;
    }

    fn release_latest_client(&mut self) {
        if let Some(client) = self.chain_clients.pop() {
            drop(client);
            debug!(remaining = self.chain_clients.len(), "chain client released");
        }
    }

    /// Owned slots currently populated, in assignment order. The client list
    /// appears once per registered client.
    pub fn installed(&self) -> &[OwnedSlot] {
        self.ledger.order()
    }

    pub fn is_installed(&self, slot: OwnedSlot) -> bool {
        self.ledger.contains(slot)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn record_install(&mut self, slot: OwnedSlot) {
        debug_assert!(
            !self.torn_down,
            "{slot} assigned into a node context that was already torn down"
        );
        self.ledger.record(slot);
        debug!(slot = %slot, position = self.ledger.len(), "installed");
    }
}

fn drop_slot<T: ?Sized>(slot: &mut Option<Box<T>>) -> bool {
    slot.take().map(drop).is_some()
}

impl Default for NodeContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NodeContext<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for NodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeContext")
            .field("installed", &self.ledger.order())
            .field("chain_clients", &self.chain_clients.len())
            .field("chainman", &self.chainman.is_some())
            .field("args", &self.args.is_some())
            .field("wallet_loader", &self.wallet_loader.is_some())
            .field("dmnman", &self.dmnman.is_some())
            .field("govman", &self.govman.is_some())
            .field("mn_sync", &self.mn_sync.is_some())
            .field("sporkman", &self.sporkman.is_some())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_nullables::{EventLog, NullChainClient, NullSubsystem};

    fn install_everything(ctx: &mut NodeContext<'_>, log: &EventLog) {
        ctx.set_scheduler(NullSubsystem::boxed("scheduler", log));
        ctx.set_addrman(NullSubsystem::boxed("addrman", log));
        ctx.set_banman(NullSubsystem::boxed("banman", log));
        ctx.set_connman(NullSubsystem::boxed("connman", log));
        ctx.set_fee_estimator(NullSubsystem::boxed("fee_estimator", log));
        ctx.set_mempool(NullSubsystem::boxed("mempool", log));
        ctx.set_evodb(NullSubsystem::boxed("evodb", log));
        ctx.set_mnhf_manager(NullSubsystem::boxed("mnhf_manager", log));
        ctx.set_llmq_ctx(NullSubsystem::boxed("llmq_ctx", log));
        ctx.set_cj_ctx(NullSubsystem::boxed("cj_ctx", log));
        ctx.set_peerman(NullSubsystem::boxed("peerman", log));
        ctx.set_chain(NullSubsystem::boxed("chain", log));
        ctx.add_chain_client(NullChainClient::boxed("wallet", log));
        ctx.set_coinjoin_loader(NullSubsystem::boxed("coinjoin_loader", log));
    }

    #[test]
    fn new_context_is_empty() {
        let ctx = NodeContext::new();
        assert!(ctx.installed().is_empty());
        for slot in OwnedSlot::ALL {
            assert!(!ctx.is_installed(slot));
        }
        assert!(ctx.addrman().is_none());
        assert!(ctx.connman().is_none());
        assert!(ctx.mempool().is_none());
        assert!(ctx.fee_estimator().is_none());
        assert!(ctx.peerman().is_none());
        assert!(ctx.banman().is_none());
        assert!(ctx.chain().is_none());
        assert!(ctx.chain_clients().is_empty());
        assert!(ctx.coinjoin_loader().is_none());
        assert!(ctx.scheduler().is_none());
        assert!(ctx.evodb().is_none());
        assert!(ctx.cj_ctx().is_none());
        assert!(ctx.mnhf_manager().is_none());
        assert!(ctx.llmq_ctx().is_none());
        assert!(ctx.chainman.is_none());
        assert!(ctx.args.is_none());
        assert!(ctx.wallet_loader.is_none());
        assert!(ctx.cpoolman.is_none());
        assert!(ctx.dmnman.is_none());
        assert!(ctx.dstxman.is_none());
        assert!(ctx.govman.is_none());
        assert!(ctx.mn_metaman.is_none());
        assert!(ctx.mn_sync.is_none());
        assert!(ctx.netfulfilledman.is_none());
        assert!(ctx.sporkman.is_none());
        assert!(ctx.rpc_interruption_point.check().is_ok());
        assert!(!ctx.is_torn_down());
    }

    #[test]
    fn every_owned_slot_released_exactly_once() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        install_everything(&mut ctx, &log);
        assert_eq!(ctx.installed().len(), OwnedSlot::ALL.len());
        assert!(log.releases().is_empty());

        drop(ctx);

        for slot in OwnedSlot::ALL {
            let subject = match slot {
                OwnedSlot::ChainClients => "wallet",
                other => other.name(),
            };
            assert_eq!(log.release_count(subject), 1, "{subject}");
        }
    }

    #[test]
    fn teardown_reverses_assignment_order() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        install_everything(&mut ctx, &log);
        drop(ctx);
        assert_eq!(
            log.releases(),
            vec![
                "coinjoin_loader",
                "wallet",
                "chain",
                "peerman",
                "cj_ctx",
                "llmq_ctx",
                "mnhf_manager",
                "evodb",
                "mempool",
                "fee_estimator",
                "connman",
                "banman",
                "addrman",
                "scheduler",
            ]
        );
    }

    #[test]
    fn teardown_ignores_declaration_order() {
        // llmq_ctx is declared after mempool but assigned before it here.
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_llmq_ctx(NullSubsystem::boxed("llmq_ctx", &log));
        ctx.set_mempool(NullSubsystem::boxed("mempool", &log));
        drop(ctx);
        assert_eq!(log.releases(), vec!["mempool", "llmq_ctx"]);
    }

    #[test]
    fn reassignment_releases_previous_immediately() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_mempool(NullSubsystem::boxed("mempool-a", &log));
        ctx.set_scheduler(NullSubsystem::boxed("scheduler", &log));
        ctx.set_mempool(NullSubsystem::boxed("mempool-b", &log));
        assert_eq!(log.releases(), vec!["mempool-a"]);
        assert_eq!(ctx.installed(), &[OwnedSlot::Scheduler, OwnedSlot::Mempool]);

        drop(ctx);
        assert_eq!(log.releases(), vec!["mempool-a", "mempool-b", "scheduler"]);
    }

    #[test]
    fn early_release_is_not_repeated_at_teardown() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_mempool(NullSubsystem::boxed("mempool", &log));
        assert!(ctx.release(OwnedSlot::Mempool));
        assert!(ctx.mempool().is_none());
        assert!(!ctx.release(OwnedSlot::Mempool));
        drop(ctx);
        assert_eq!(log.release_count("mempool"), 1);
    }

    #[test]
    fn explicit_teardown_then_drop_releases_once() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_banman(NullSubsystem::boxed("banman", &log));
        ctx.teardown();
        assert!(ctx.is_torn_down());
        assert_eq!(log.release_count("banman"), 1);
        drop(ctx);
        assert_eq!(log.release_count("banman"), 1);
    }

    #[test]
    fn borrowed_handles_are_never_released() {
        let log = EventLog::new();
        let chainman = NullSubsystem::new("chainman", &log).with_height(100);
        let sporkman = NullSubsystem::new("sporkman", &log);
        let mut ctx = NodeContext::new();
        ctx.chainman = Some(&chainman);
        ctx.sporkman = Some(&sporkman);
        assert_eq!(ctx.chainman.and_then(|c| c.active_height()), Some(100));
        drop(ctx);
        assert_eq!(log.release_count("chainman"), 0);
        assert_eq!(log.release_count("sporkman"), 0);
        drop(chainman);
        assert_eq!(log.release_count("chainman"), 1);
    }

    #[test]
    fn clients_iterate_in_registration_order_and_release_newest_first() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        for name in ["c1", "c2", "c3"] {
            ctx.add_chain_client(NullChainClient::boxed(name, &log));
        }
        assert_eq!(ctx.installed(), &[OwnedSlot::ChainClients; 3]);
        for client in ctx.chain_clients() {
            client.flush();
        }
        assert_eq!(log.subjects_with("flush"), vec!["c1", "c2", "c3"]);
        drop(ctx);
        assert_eq!(log.releases(), vec!["c3", "c2", "c1"]);
    }

    #[test]
    fn late_client_is_released_before_earlier_chain() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.add_chain_client(NullChainClient::boxed("c1", &log));
        ctx.set_chain(NullSubsystem::boxed("chain", &log));
        ctx.add_chain_client(NullChainClient::boxed("c2", &log));
        assert_eq!(
            ctx.installed(),
            &[OwnedSlot::ChainClients, OwnedSlot::Chain, OwnedSlot::ChainClients]
        );
        drop(ctx);
        assert_eq!(log.releases(), vec!["c2", "chain", "c1"]);
    }

    #[test]
    fn releasing_client_list_clears_every_entry() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.add_chain_client(NullChainClient::boxed("c1", &log));
        ctx.set_scheduler(NullSubsystem::boxed("scheduler", &log));
        ctx.add_chain_client(NullChainClient::boxed("c2", &log));

        assert!(ctx.release(OwnedSlot::ChainClients));
        assert_eq!(log.releases(), vec!["c2", "c1"]);
        assert_eq!(ctx.installed(), &[OwnedSlot::Scheduler]);
        assert!(!ctx.is_installed(OwnedSlot::ChainClients));

        drop(ctx);
        assert_eq!(log.releases(), vec!["c2", "c1", "scheduler"]);
    }

    #[test]
    fn wallet_loader_can_also_be_a_borrowed_client() {
        let log = EventLog::new();
        let wallet = NullChainClient::new("wallet", &log).with_wallets(&["main"]);
        let mut ctx = NodeContext::new();
        ctx.wallet_loader = Some(&wallet);
        ctx.add_chain_client(Box::new(&wallet));
        assert_eq!(ctx.chain_clients().len(), 1);
        assert_eq!(
            ctx.wallet_loader.map(|w| w.wallet_names()),
            Some(vec!["main".to_string()])
        );
        drop(ctx);
        assert_eq!(log.release_count("wallet"), 0);
    }

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<NodeContext<'static>>();

        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_mempool(Box::new(NullSubsystem::new("mempool", &log).with_size(12)));
        let ctx = &ctx;
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(move || {
                    ctx.rpc_interruption_point.check().unwrap();
                    assert_eq!(ctx.mempool().map(|m| m.size()), Some(12));
                });
            }
        });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already torn down")]
    fn assignment_after_teardown_is_caught_in_debug_builds() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.teardown();
        ctx.set_scheduler(NullSubsystem::boxed("scheduler", &log));
    }

    #[test]
    fn debug_lists_installed_slots() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_connman(NullSubsystem::boxed("connman", &log));
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("Connman"));
        assert!(rendered.contains("torn_down: false"));
    }
}
