//! Node configuration with TOML file support.
//!
//! A loaded [`NodeConfig`] is owned by the process bootstrap; the node
//! context only borrows it through its `args` handle.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogFormat;
use crate::NodeError;

/// Which Dash network the node joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Regtest,
}

impl Network {
    /// Default P2P port for this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Mainnet => 9999,
            Self::Testnet => 19999,
            Self::Devnet => 19799,
            Self::Regtest => 19899,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Regtest => "regtest",
        }
    }
}

/// Configuration for a Dash node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Which network to connect to.
    #[serde(default = "default_network")]
    pub network: Network,

    /// Data directory for chain state, wallets and databases.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Port to listen on for P2P connections. Falls back to the network's
    /// default port when unset; see [`NodeConfig::p2p_port`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Maximum number of peer connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Relay blocks only. No fee estimator is started in this mode.
    #[serde(default)]
    pub blocks_only: bool,

    /// Attach wallet chain clients.
    #[serde(default = "default_true")]
    pub enable_wallet: bool,

    /// Load the CoinJoin mixing client. Requires the wallet.
    #[serde(default = "default_true")]
    pub enable_coinjoin: bool,

    /// Run as a masternode. Masternodes never mix, so this turns the CoinJoin
    /// loader off.
    #[serde(default)]
    pub masternode: bool,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> Network {
    Network::Mainnet
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./dashcore_data")
}

fn default_max_connections() -> usize {
    125
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, NodeError> {
        toml::to_string_pretty(self).map_err(|e| NodeError::Serialization(e.to_string()))
    }

    /// The P2P listen port: the configured one, or the network default.
    pub fn p2p_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.network.default_port())
    }

    /// Whether the CoinJoin loader should be attached. Mixing runs inside the
    /// wallet and is never done by a masternode.
    pub fn coinjoin_enabled(&self) -> bool {
        self.enable_wallet && self.enable_coinjoin && !self.masternode
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            data_dir: default_data_dir(),
            port: None,
            max_connections: default_max_connections(),
            blocks_only: false,
            enable_wallet: default_true(),
            enable_coinjoin: default_true(),
            masternode: false,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
