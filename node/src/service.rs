//! Service-layer access to the node context.
//!
//! Command handlers never dereference an absent handle: they go through the
//! `ensure_*` helpers, which turn absence into [`NodeError::Disabled`], or
//! report absence as `None` in a status summary.

use serde::Serialize;
use tracing::debug;

use dash_interfaces::{
    BanManager, ChainstateManager, ConnectionManager, PeerManager, Scheduler, TransactionPool,
    WalletLoader,
};

use crate::context::NodeContext;
use crate::error::NodeError;
use crate::tracing_spans::service_span;

pub fn ensure_mempool<'c>(ctx: &'c NodeContext<'_>) -> Result<&'c dyn TransactionPool, NodeError> {
    match ctx.mempool() {
        Some(mempool) => Ok(mempool),
        None => Err(NodeError::Disabled("mempool")),
    }
}

pub fn ensure_connman<'c>(
    ctx: &'c NodeContext<'_>,
) -> Result<&'c dyn ConnectionManager, NodeError> {
    match ctx.connman() {
        Some(connman) => Ok(connman),
        None => Err(NodeError::Disabled("peer-to-peer functionality")),
    }
}

pub fn ensure_peerman<'c>(ctx: &'c NodeContext<'_>) -> Result<&'c dyn PeerManager, NodeError> {
    match ctx.peerman() {
        Some(peerman) => Ok(peerman),
        None => Err(NodeError::Disabled("peer-to-peer functionality")),
    }
}

pub fn ensure_banman<'c>(ctx: &'c NodeContext<'_>) -> Result<&'c dyn BanManager, NodeError> {
    match ctx.banman() {
        Some(banman) => Ok(banman),
        None => Err(NodeError::Disabled("ban list")),
    }
}

pub fn ensure_scheduler<'c>(ctx: &'c NodeContext<'_>) -> Result<&'c dyn Scheduler, NodeError> {
    match ctx.scheduler() {
        Some(scheduler) => Ok(scheduler),
        None => Err(NodeError::Disabled("scheduler")),
    }
}

pub fn ensure_chainman<'a>(ctx: &NodeContext<'a>) -> Result<&'a dyn ChainstateManager, NodeError> {
    ctx.chainman.ok_or(NodeError::Disabled("chainstate manager"))
}

pub fn ensure_wallet_loader<'a>(ctx: &NodeContext<'a>) -> Result<&'a dyn WalletLoader, NodeError> {
    ctx.wallet_loader.ok_or(NodeError::Disabled("wallet"))
}

/// Point-in-time summary of which subsystems are running and what they
/// report. `None` means the subsystem is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub network: Option<&'static str>,
    pub chain_height: Option<u32>,
    pub connections: Option<usize>,
    pub mempool_size: Option<usize>,
    pub mempool_bytes: Option<usize>,
    pub known_addresses: Option<usize>,
    pub banned: Option<usize>,
    pub scheduled_tasks: Option<usize>,
    pub chain_clients: usize,
    pub wallets: Vec<String>,
    pub coinjoin_enabled: bool,
    pub coinjoin_mixing: bool,
    pub masternode_count: Option<usize>,
    pub governance_objects: Option<usize>,
    pub masternode_synced: Option<bool>,
}

/// Collect a [`NodeInfo`] from whatever is present in `ctx`.
///
/// Checks the context's interruption point first, so a node that is shutting
/// down refuses the request.
pub fn node_info(ctx: &NodeContext<'_>) -> Result<NodeInfo, NodeError> {
    let _span = service_span("getnodeinfo").entered();
    ctx.rpc_interruption_point.check()?;

    let info = NodeInfo {
        network: ctx.args.map(|args| args.network.as_str()),
        chain_height: ctx.chainman.and_then(|c| c.active_height()),
        connections: ctx.connman().map(|c| c.node_count()),
        mempool_size: ctx.mempool().map(|m| m.size()),
        mempool_bytes: ctx.mempool().map(|m| m.total_bytes()),
        known_addresses: ctx.addrman().map(|a| a.size()),
        banned: ctx.banman().map(|b| b.banned_count()),
        scheduled_tasks: ctx.scheduler().map(|s| s.pending_tasks()),
        chain_clients: ctx.chain_clients().len(),
        wallets: ctx
            .wallet_loader
            .map(|w| w.wallet_names())
            .unwrap_or_default(),
        coinjoin_enabled: ctx.coinjoin_loader().is_some(),
        coinjoin_mixing: ctx.coinjoin_loader().is_some_and(|l| l.is_mixing()),
        masternode_count: ctx.dmnman.map(|d| d.masternode_count()),
        governance_objects: ctx.govman.map(|g| g.object_count()),
        masternode_synced: ctx.mn_sync.map(|s| s.is_synced()),
    };
    debug!(?info, "node info collected");
    Ok(info)
}

/// [`node_info`] rendered as a JSON value for the command interface.
pub fn node_info_json(ctx: &NodeContext<'_>) -> Result<serde_json::Value, NodeError> {
    let info = node_info(ctx)?;
    serde_json::to_value(info).map_err(|e| NodeError::Serialization(e.to_string()))
}
