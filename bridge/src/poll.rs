//! Waiting for on-chain confirmation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use govtool_types::TxId;

use crate::bridge::SubmissionBridge;
use crate::error::BridgeError;
use crate::tx::TxStatus;

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_tx_timeout_secs() -> u64 {
    600
}

/// Polling cadence and the overall confirmation deadline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_tx_timeout_secs")]
    pub tx_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            tx_timeout_secs: default_tx_timeout_secs(),
        }
    }
}

impl BridgeConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn tx_timeout(&self) -> Duration {
        Duration::from_secs(self.tx_timeout_secs)
    }
}

/// Poll `tx_id` until the bridge reports it confirmed or failed.
///
/// Transient request errors are retried until the deadline; the last one is
/// logged. Exceeding `tx_timeout` yields [`BridgeError::Timeout`].
pub async fn poll_transaction<B: SubmissionBridge>(
    bridge: &B,
    tx_id: &TxId,
    config: &BridgeConfig,
) -> Result<(), BridgeError> {
    let interval = config.poll_interval();
    let deadline = config.tx_timeout();

    let poll = async {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match bridge.tx_status(tx_id).await {
                Ok(TxStatus::Confirmed) => {
                    tracing::info!(tx = %tx_id, attempts, "transaction confirmed");
                    return Ok(());
                }
                Ok(TxStatus::Failed { reason }) => {
                    tracing::warn!(tx = %tx_id, %reason, "transaction failed");
                    return Err(BridgeError::from_reason(&reason));
                }
                Ok(TxStatus::Pending) => {
                    tracing::trace!(tx = %tx_id, attempts, "transaction pending");
                }
                Err(e) => {
                    tracing::debug!(tx = %tx_id, error = %e, "status request failed, retrying");
                }
            }
            tokio::time::sleep(interval).await;
        }
    };

    tokio::time::timeout(deadline, poll).await.map_err(|_| {
        tracing::warn!(tx = %tx_id, ?deadline, "gave up waiting for confirmation");
        BridgeError::Timeout(deadline)
    })?
}
