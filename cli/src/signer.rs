//! Signing from the command line: the witness set is produced offline
//! (hardware wallet, cardano-cli) and passed in as hex.

use govtool_bridge::{BridgeError, SubmissionRequest, WalletSigner, Witness};

pub struct StaticSigner {
    witness: Witness,
}

impl StaticSigner {
    pub fn from_hex(witness: &str) -> Result<Self, BridgeError> {
        let witness = witness.trim();
        if witness.is_empty() {
            return Err(BridgeError::WalletUnavailable("no witness supplied".into()));
        }
        hex::decode(witness)
            .map_err(|e| BridgeError::WalletUnavailable(format!("witness is not hex: {e}")))?;
        Ok(Self {
            witness: Witness(witness.to_ascii_lowercase()),
        })
    }
}

impl WalletSigner for StaticSigner {
    async fn sign(&self, request: &SubmissionRequest) -> Result<Witness, BridgeError> {
        tracing::debug!(kind = request.kind(), "using pre-signed witness");
        Ok(self.witness.clone())
    }
}
