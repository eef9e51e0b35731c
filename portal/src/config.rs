//! Portal configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use govtool_bridge::BridgeConfig;
use govtool_types::NetworkId;
use govtool_utils::LogFormat;

use crate::PortalError;

/// Configuration for a GovTool portal instance.
///
/// Can be loaded from a TOML file via [`PortalConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Which network the portal and connected wallets are on.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Local-storage key prefix for the persisted session.
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,

    /// Base URL of the transaction-building service.
    #[serde(default = "default_bridge_url")]
    pub bridge_url: String,

    /// Base URL of the GovTool backend (voting power, DRep info).
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Host the portal is served from; links to other hosts are external.
    #[serde(default = "default_portal_host")]
    pub portal_host: String,

    /// Delay between confirmation polls, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Give up waiting for confirmation after this many seconds.
    #[serde(default = "default_tx_timeout_secs")]
    pub tx_timeout_secs: u64,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Sanchonet
}

fn default_storage_prefix() -> String {
    govtool_session::WALLET_LS_KEY.to_string()
}

fn default_bridge_url() -> String {
    "http://127.0.0.1:8081".to_string()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:9999".to_string()
}

fn default_portal_host() -> String {
    "sanchogov.tools".to_string()
}

fn default_poll_interval_ms() -> u64 {
    BridgeConfig::default().poll_interval_ms
}

fn default_tx_timeout_secs() -> u64 {
    BridgeConfig::default().tx_timeout_secs
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PortalConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PortalError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PortalError> {
        toml::from_str(s).map_err(|e| PortalError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, PortalError> {
        toml::to_string_pretty(self).map_err(|e| PortalError::Config(e.to_string()))
    }

    /// Polling settings handed to the bridge.
    pub fn bridge(&self) -> BridgeConfig {
        BridgeConfig {
            poll_interval_ms: self.poll_interval_ms,
            tx_timeout_secs: self.tx_timeout_secs,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            storage_prefix: default_storage_prefix(),
            bridge_url: default_bridge_url(),
            backend_url: default_backend_url(),
            portal_host: default_portal_host(),
            poll_interval_ms: default_poll_interval_ms(),
            tx_timeout_secs: default_tx_timeout_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
