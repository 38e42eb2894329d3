//! Nullable chain client — records its lifecycle and can be told to fail.

use dash_interfaces::{ChainClient, InterfaceError, Scheduler, WalletLoader};

use crate::event_log::{EventLog, RELEASED};

/// Startup stage at which a [`NullChainClient`] can be made to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientStage {
    Verify,
    Load,
    Start,
}

/// A chain client (and wallet loader) that records every call.
pub struct NullChainClient {
    name: String,
    log: EventLog,
    fail_at: Option<ClientStage>,
    wallets: Vec<String>,
}

impl NullChainClient {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            fail_at: None,
            wallets: Vec::new(),
        }
    }

    pub fn boxed(name: &str, log: &EventLog) -> Box<Self> {
        Box::new(Self::new(name, log))
    }

    /// Make the given stage return an error.
    pub fn failing_at(mut self, stage: ClientStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn with_wallets(mut self, wallets: &[&str]) -> Self {
        self.wallets = wallets.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn stage(&self, stage: ClientStage, action: &'static str) -> Result<(), InterfaceError> {
        self.log.record(&self.name, action);
        if self.fail_at == Some(stage) {
            return Err(InterfaceError::failed(&self.name, format!("{action} failed")));
        }
        Ok(())
    }
}

impl ChainClient for NullChainClient {
    fn verify(&self) -> Result<(), InterfaceError> {
        self.stage(ClientStage::Verify, "verify")
    }

    fn load(&self) -> Result<(), InterfaceError> {
        self.stage(ClientStage::Load, "load")
    }

    fn start(&self, _scheduler: &dyn Scheduler) -> Result<(), InterfaceError> {
        self.stage(ClientStage::Start, "start")
    }

    fn flush(&self) {
        self.log.record(&self.name, "flush");
    }

    fn stop(&self) {
        self.log.record(&self.name, "stop");
    }
}

impl WalletLoader for NullChainClient {
    fn wallet_names(&self) -> Vec<String> {
        self.wallets.clone()
    }
}

impl Drop for NullChainClient {
    fn drop(&mut self) {
        self.log.record(&self.name, RELEASED);
    }
}
