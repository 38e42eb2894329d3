//! Reference startup and shutdown sequencing for a node context.
//!
//! The context itself enforces nothing about order; this module is where the
//! order lives. [`populate`] assigns subsystems so that every subsystem is
//! installed after the ones it reads from, which makes the context's
//! reverse-order teardown release dependents first. [`shutdown`] stops
//! background work before anything is released.

use tracing::{debug, info, warn};

use dash_interfaces::{
    ChainstateManager, CreditPoolManager, DeterministicMnManager, DstxManager, GovernanceManager,
    MasternodeMetaManager, MasternodeSync, NetFulfilledRequestManager, SporkManager,
    SubsystemFactory, WalletLoader,
};

use crate::config::NodeConfig;
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::tracing_spans::{install_span, shutdown_span, startup_span};

/// Subsystems owned outside the context that it only references.
#[derive(Clone, Copy, Default)]
pub struct ExternalHandles<'a> {
    pub chainman: Option<&'a dyn ChainstateManager>,
    pub wallet_loader: Option<&'a dyn WalletLoader>,
    pub cpoolman: Option<&'a dyn CreditPoolManager>,
    pub dmnman: Option<&'a dyn DeterministicMnManager>,
    pub dstxman: Option<&'a dyn DstxManager>,
    pub govman: Option<&'a dyn GovernanceManager>,
    pub mn_metaman: Option<&'a dyn MasternodeMetaManager>,
    pub mn_sync: Option<&'a dyn MasternodeSync>,
    pub netfulfilledman: Option<&'a dyn NetFulfilledRequestManager>,
    pub sporkman: Option<&'a dyn SporkManager>,
}

/// Fill `ctx` with every subsystem `config` enables.
///
/// Owned subsystems are built by `factory` and installed in dependency
/// order: scheduler, address book, ban list, connections, fee estimator,
/// mempool, evolution DB, MNHF, quorums, CoinJoin context, peer manager,
/// chain interface, chain clients, CoinJoin loader.
///
/// The wallet loader is only linked when the wallet is enabled, so a
/// wallet-disabled node reports it as absent.
///
/// If a constructor fails, everything installed so far is torn down (newest
/// first), `args` and the external references are cleared, and the error is
/// returned. The context must not be populated again afterwards.
pub fn populate<'a, F>(
    ctx: &mut NodeContext<'a>,
    config: &'a NodeConfig,
    external: ExternalHandles<'a>,
    factory: &F,
) -> Result<(), NodeError>
where
    F: SubsystemFactory<'a> + ?Sized,
{
    let _span = startup_span(config.network.as_str()).entered();

    ctx.args = Some(config);
    ctx.chainman = external.chainman;
    if config.enable_wallet {
        ctx.wallet_loader = external.wallet_loader;
    }
    ctx.cpoolman = external.cpoolman;
    ctx.dmnman = external.dmnman;
    ctx.dstxman = external.dstxman;
    ctx.govman = external.govman;
    ctx.mn_metaman = external.mn_metaman;
    ctx.mn_sync = external.mn_sync;
    ctx.netfulfilledman = external.netfulfilledman;
    ctx.sporkman = external.sporkman;

    if let Err(e) = install_owned(ctx, config, factory) {
        warn!(error = %e, installed = ctx.installed().len(), "startup failed, rolling back");
        ctx.teardown();
        unlink_external(ctx);
        return Err(e);
    }

    info!(
        installed = ctx.installed().len(),
        clients = ctx.chain_clients().len(),
        "node context populated"
    );
    Ok(())
}

fn unlink_external(ctx: &mut NodeContext<'_>) {
    ctx.args = None;
    ctx.chainman = None;
    ctx.wallet_loader = None;
    ctx.cpoolman = None;
    ctx.dmnman = None;
    ctx.dstxman = None;
    ctx.govman = None;
    ctx.mn_metaman = None;
    ctx.mn_sync = None;
    ctx.netfulfilledman = None;
    ctx.sporkman = None;
}

fn install_owned<'a, F>(
    ctx: &mut NodeContext<'a>,
    config: &NodeConfig,
    factory: &F,
) -> Result<(), NodeError>
where
    F: SubsystemFactory<'a> + ?Sized,
{
    install(ctx, "scheduler", |ctx| {
        ctx.set_scheduler(factory.scheduler()?);
        Ok(())
    })?;
    install(ctx, "addrman", |ctx| {
        ctx.set_addrman(factory.address_book()?);
        Ok(())
    })?;
    install(ctx, "banman", |ctx| {
        ctx.set_banman(factory.ban_manager()?);
        Ok(())
    })?;
    install(ctx, "connman", |ctx| {
        ctx.set_connman(factory.connection_manager()?);
        Ok(())
    })?;
    if config.blocks_only {
        debug!("blocks-only mode, fee estimation disabled");
    } else {
        install(ctx, "fee_estimator", |ctx| {
            ctx.set_fee_estimator(factory.fee_estimator()?);
            Ok(())
        })?;
    }
    install(ctx, "mempool", |ctx| {
        ctx.set_mempool(factory.transaction_pool()?);
        Ok(())
    })?;
    install(ctx, "evodb", |ctx| {
        ctx.set_evodb(factory.evolution_db()?);
        Ok(())
    })?;
    install(ctx, "mnhf_manager", |ctx| {
        ctx.set_mnhf_manager(factory.mnhf_manager()?);
        Ok(())
    })?;
    install(ctx, "llmq_ctx", |ctx| {
        ctx.set_llmq_ctx(factory.quorum_context()?);
        Ok(())
    })?;
    install(ctx, "cj_ctx", |ctx| {
        ctx.set_cj_ctx(factory.coinjoin_context()?);
        Ok(())
    })?;
    install(ctx, "peerman", |ctx| {
        ctx.set_peerman(factory.peer_manager()?);
        Ok(())
    })?;
    install(ctx, "chain", |ctx| {
        ctx.set_chain(factory.chain()?);
        Ok(())
    })?;
    if config.enable_wallet {
        install(ctx, "chain_clients", |ctx| {
            for client in factory.chain_clients()? {
                ctx.add_chain_client(client);
            }
            Ok(())
        })?;
    }
    if config.coinjoin_enabled() {
        install(ctx, "coinjoin_loader", |ctx| {
            ctx.set_coinjoin_loader(factory.coinjoin_loader()?);
            Ok(())
        })?;
    }
    Ok(())
}

fn install<'a>(
    ctx: &mut NodeContext<'a>,
    slot: &str,
    step: impl FnOnce(&mut NodeContext<'a>) -> Result<(), NodeError>,
) -> Result<(), NodeError> {
    let _span = install_span(slot).entered();
    step(ctx)
}

/// Verify, load and start every registered client, in registration order.
pub fn start_clients(ctx: &NodeContext<'_>) -> Result<(), NodeError> {
    if ctx.chain_clients().is_empty() {
        return Ok(());
    }
    let scheduler = ctx.scheduler().ok_or(NodeError::Disabled("scheduler"))?;
    for client in ctx.chain_clients() {
        client.verify()?;
    }
    for client in ctx.chain_clients() {
        client.load()?;
    }
    for client in ctx.chain_clients() {
        client.start(scheduler)?;
    }
    info!(clients = ctx.chain_clients().len(), "chain clients started");
    Ok(())
}

/// Ask the threaded subsystems to wind down without waiting for them.
pub fn interrupt(ctx: &NodeContext<'_>) {
    if let Some(llmq) = ctx.llmq_ctx() {
        llmq.interrupt();
    }
    if let Some(connman) = ctx.connman() {
        connman.interrupt();
    }
    if let Some(peerman) = ctx.peerman() {
        peerman.interrupt();
    }
}

/// Stop background work, persist state, then release every owned subsystem.
///
/// Must run on the thread that owns the context after every other reader
/// has been joined.
pub fn shutdown(ctx: &mut NodeContext<'_>) {
    let _span = shutdown_span().entered();
    info!("shutdown in progress");

    for client in ctx.chain_clients() {
        client.flush();
    }
    for client in ctx.chain_clients() {
        client.stop();
    }
    if let Some(connman) = ctx.connman() {
        connman.stop();
    }
    if let Some(scheduler) = ctx.scheduler() {
        scheduler.stop();
    }
    if let Some(fee_estimator) = ctx.fee_estimator() {
        fee_estimator.flush();
    }
    if let Some(banman) = ctx.banman() {
        banman.dump();
    }

    ctx.teardown();
    info!("shutdown done");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teardown::OwnedSlot;
    use dash_nullables::{ClientStage, EventLog, NullChainClient, NullFactory, NullSubsystem, BUILT};

    #[test]
    fn populate_installs_in_dependency_order() {
        let log = EventLog::new();
        let config = NodeConfig::default();
        let factory = NullFactory::new(&log);
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &factory).unwrap();

        assert_eq!(
            ctx.installed(),
            &[
                OwnedSlot::Scheduler,
                OwnedSlot::AddrMan,
                OwnedSlot::BanMan,
                OwnedSlot::Connman,
                OwnedSlot::FeeEstimator,
                OwnedSlot::Mempool,
                OwnedSlot::EvoDb,
                OwnedSlot::MnhfManager,
                OwnedSlot::LlmqContext,
                OwnedSlot::CoinJoinContext,
                OwnedSlot::PeerMan,
                OwnedSlot::Chain,
                OwnedSlot::ChainClients,
                OwnedSlot::CoinJoinLoader,
            ]
        );
        assert!(ctx.args.is_some());
    }

    #[test]
    fn populate_respects_config_switches() {
        let log = EventLog::new();
        let config = NodeConfig {
            blocks_only: true,
            enable_wallet: false,
            ..NodeConfig::default()
        };
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &NullFactory::new(&log)).unwrap();

        assert!(ctx.fee_estimator().is_none());
        assert!(ctx.chain_clients().is_empty());
        assert!(ctx.coinjoin_loader().is_none());
        assert!(ctx.mempool().is_some());
    }

    #[test]
    fn wallet_loader_left_absent_when_wallet_disabled() {
        let log = EventLog::new();
        let wallet = NullChainClient::new("wallet", &log).with_wallets(&["main"]);
        let config = NodeConfig {
            enable_wallet: false,
            ..NodeConfig::default()
        };
        let external = ExternalHandles {
            wallet_loader: Some(&wallet),
            ..ExternalHandles::default()
        };
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, external, &NullFactory::new(&log)).unwrap();

        assert!(ctx.wallet_loader.is_none());
        assert!(ctx.chain_clients().is_empty());
        assert!(matches!(
            crate::service::ensure_wallet_loader(&ctx),
            Err(NodeError::Disabled("wallet"))
        ));
    }

    #[test]
    fn wallet_loader_linked_when_wallet_enabled() {
        let log = EventLog::new();
        let wallet = NullChainClient::new("wallet", &log).with_wallets(&["main"]);
        let config = NodeConfig::default();
        let external = ExternalHandles {
            wallet_loader: Some(&wallet),
            ..ExternalHandles::default()
        };
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, external, &NullFactory::new(&log)).unwrap();
        assert_eq!(
            ctx.wallet_loader.map(|w| w.wallet_names()),
            Some(vec!["main".to_string()])
        );
    }

    #[test]
    fn masternode_skips_coinjoin_loader() {
        let log = EventLog::new();
        let config = NodeConfig {
            masternode: true,
            ..NodeConfig::default()
        };
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &NullFactory::new(&log)).unwrap();
        assert!(ctx.coinjoin_loader().is_none());
        assert_eq!(ctx.chain_clients().len(), 1);
        assert!(log.subjects_with(BUILT).iter().all(|s| s != "coinjoin_loader"));
    }

    #[test]
    fn populate_links_external_handles() {
        let log = EventLog::new();
        let chainman = NullSubsystem::new("chainman", &log).with_height(7);
        let mn_sync = NullSubsystem::new("mn_sync", &log).with_synced(true);
        let config = NodeConfig::default();
        let external = ExternalHandles {
            chainman: Some(&chainman),
            mn_sync: Some(&mn_sync),
            ..ExternalHandles::default()
        };
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, external, &NullFactory::new(&log)).unwrap();

        assert_eq!(ctx.chainman.and_then(|c| c.active_height()), Some(7));
        assert_eq!(ctx.mn_sync.map(|s| s.is_synced()), Some(true));
        drop(ctx);
        assert_eq!(log.release_count("chainman"), 0);
        assert_eq!(log.release_count("mn_sync"), 0);
    }

    #[test]
    fn failed_constructor_rolls_back_installed_subsystems() {
        let log = EventLog::new();
        let chainman = NullSubsystem::new("chainman", &log);
        let mn_sync = NullSubsystem::new("mn_sync", &log);
        let config = NodeConfig::default();
        let external = ExternalHandles {
            chainman: Some(&chainman),
            mn_sync: Some(&mn_sync),
            ..ExternalHandles::default()
        };
        let factory = NullFactory::new(&log).failing_on("llmq_ctx");
        let mut ctx = NodeContext::new();

        let err = populate(&mut ctx, &config, external, &factory).unwrap_err();
        assert!(matches!(err, NodeError::Subsystem(ref e) if e.subsystem() == "llmq_ctx"));
        assert!(ctx.installed().is_empty());
        assert!(ctx.is_torn_down());
        assert!(ctx.args.is_none());
        assert!(ctx.chainman.is_none());
        assert!(ctx.mn_sync.is_none());
        assert_eq!(
            log.releases(),
            vec![
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
        assert!(log.subjects_with(BUILT).iter().all(|s| s != "peerman"));
    }

    #[test]
    fn start_clients_runs_stages_in_order() {
        let log = EventLog::new();
        let config = NodeConfig::default();
        let factory = NullFactory::new(&log).with_clients(&["w1", "w2"]);
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &factory).unwrap();
        start_clients(&ctx).unwrap();

        assert_eq!(log.actions_for("w1"), vec!["verify", "load", "start"]);
        assert_eq!(log.subjects_with("verify"), vec!["w1", "w2"]);
        assert_eq!(log.subjects_with("start"), vec!["w1", "w2"]);
    }

    #[test]
    fn start_clients_stops_at_first_failure() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.set_scheduler(NullSubsystem::boxed("scheduler", &log));
        ctx.add_chain_client(Box::new(
            NullChainClient::new("broken", &log).failing_at(ClientStage::Verify),
        ));
        ctx.add_chain_client(NullChainClient::boxed("healthy", &log));

        let err = start_clients(&ctx).unwrap_err();
        assert!(matches!(err, NodeError::Subsystem(_)));
        assert!(log.actions_for("healthy").is_empty());
    }

    #[test]
    fn start_clients_needs_scheduler() {
        let log = EventLog::new();
        let mut ctx = NodeContext::new();
        ctx.add_chain_client(NullChainClient::boxed("wallet", &log));
        let err = start_clients(&ctx).unwrap_err();
        assert!(matches!(err, NodeError::Disabled("scheduler")));
    }

    #[test]
    fn interrupt_reaches_threaded_subsystems() {
        let log = EventLog::new();
        let config = NodeConfig::default();
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &NullFactory::new(&log)).unwrap();
        interrupt(&ctx);
        assert_eq!(
            log.subjects_with("interrupt"),
            vec!["llmq_ctx", "connman", "peerman"]
        );
        assert!(log.releases().is_empty());
    }

    #[test]
    fn shutdown_stops_before_releasing() {
        let log = EventLog::new();
        let config = NodeConfig::default();
        let mut ctx = NodeContext::new();
        populate(&mut ctx, &config, ExternalHandles::default(), &NullFactory::new(&log)).unwrap();
        log.clear();

        shutdown(&mut ctx);

        let events = log.events();
        let first_release = events
            .iter()
            .position(|e| e.action == dash_nullables::RELEASED)
            .unwrap();
        let hooks: Vec<_> = events[..first_release]
            .iter()
            .map(|e| format!("{}:{}", e.subject, e.action))
            .collect();
        assert_eq!(
            hooks,
            vec![
                "wallet:flush",
                "wallet:stop",
                "connman:stop",
                "scheduler:stop",
                "fee_estimator:flush",
                "banman:dump",
            ]
        );
        assert!(ctx.installed().is_empty());
        assert_eq!(log.releases().len(), OwnedSlot::ALL.len());
    }
}
