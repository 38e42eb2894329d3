//! Nullable subsystem factory — builds recording stand-ins and can be told to
//! fail on a named subsystem.

use dash_interfaces::{
    AddressBook, BanManager, Chain, ChainClient, CoinJoinContext, CoinJoinLoader,
    ConnectionManager, EvolutionDb, FeeEstimator, InterfaceError, MnhfManager, PeerManager,
    QuorumContext, Scheduler, SubsystemFactory, TransactionPool,
};

use crate::chain_client::NullChainClient;
use crate::event_log::EventLog;
use crate::subsystem::NullSubsystem;

/// Action recorded each time the factory builds a subsystem.
pub const BUILT: &str = "built";

/// Builds a [`NullSubsystem`] for every slot, named after the slot.
///
/// Names: `scheduler`, `addrman`, `banman`, `connman`, `fee_estimator`,
/// `mempool`, `evodb`, `mnhf_manager`, `llmq_ctx`, `cj_ctx`, `peerman`,
/// `chain`, `coinjoin_loader`; clients use the names given to
/// [`NullFactory::with_clients`].
pub struct NullFactory {
    log: EventLog,
    fail_on: Option<String>,
    clients: Vec<String>,
}

impl NullFactory {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_on: None,
            clients: vec!["wallet".to_string()],
        }
    }

    /// Make construction of `name` fail with [`InterfaceError::Failed`].
    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    /// Client names to build, in registration order.
    pub fn with_clients(mut self, names: &[&str]) -> Self {
        self.clients = names.iter().map(|n| n.to_string()).collect();
        self
    }

    fn check(&self, name: &str) -> Result<(), InterfaceError> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(InterfaceError::failed(name, "construction failed"));
        }
        self.log.record(name, BUILT);
        Ok(())
    }

    fn build(&self, name: &str) -> Result<Box<NullSubsystem>, InterfaceError> {
        self.check(name)?;
        Ok(NullSubsystem::boxed(name, &self.log))
    }
}

impl<'a> SubsystemFactory<'a> for NullFactory {
    fn scheduler(&self) -> Result<Box<dyn Scheduler + 'a>, InterfaceError> {
        Ok(self.build("scheduler")?)
    }

    fn address_book(&self) -> Result<Box<dyn AddressBook + 'a>, InterfaceError> {
        Ok(self.build("addrman")?)
    }

    fn ban_manager(&self) -> Result<Box<dyn BanManager + 'a>, InterfaceError> {
        Ok(self.build("banman")?)
    }

    fn connection_manager(&self) -> Result<Box<dyn ConnectionManager + 'a>, InterfaceError> {
        Ok(self.build("connman")?)
    }

    fn fee_estimator(&self) -> Result<Box<dyn FeeEstimator + 'a>, InterfaceError> {
        Ok(self.build("fee_estimator")?)
    }

    fn transaction_pool(&self) -> Result<Box<dyn TransactionPool + 'a>, InterfaceError> {
        Ok(self.build("mempool")?)
    }

    fn evolution_db(&self) -> Result<Box<dyn EvolutionDb + 'a>, InterfaceError> {
        Ok(self.build("evodb")?)
    }

    fn mnhf_manager(&self) -> Result<Box<dyn MnhfManager + 'a>, InterfaceError> {
        Ok(self.build("mnhf_manager")?)
    }

    fn quorum_context(&self) -> Result<Box<dyn QuorumContext + 'a>, InterfaceError> {
        Ok(self.build("llmq_ctx")?)
    }

    fn coinjoin_context(&self) -> Result<Box<dyn CoinJoinContext + 'a>, InterfaceError> {
        Ok(self.build("cj_ctx")?)
    }

    fn peer_manager(&self) -> Result<Box<dyn PeerManager + 'a>, InterfaceError> {
        Ok(self.build("peerman")?)
    }

    fn chain(&self) -> Result<Box<dyn Chain + 'a>, InterfaceError> {
        Ok(self.build("chain")?)
    }

    fn chain_clients(&self) -> Result<Vec<Box<dyn ChainClient + 'a>>, InterfaceError> {
        self.check("chain_clients")?;
        Ok(self
            .clients
            .iter()
            .map(|name| NullChainClient::boxed(name, &self.log) as Box<dyn ChainClient + 'a>)
            .collect())
    }

    fn coinjoin_loader(&self) -> Result<Box<dyn CoinJoinLoader + 'a>, InterfaceError> {
        Ok(self.build("coinjoin_loader")?)
    }
}
