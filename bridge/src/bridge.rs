//! The two external collaborators of a submission: the wallet extension that
//! signs and the remote service that builds, submits and tracks the tx.

use std::future::Future;

use govtool_types::TxId;

use crate::error::BridgeError;
use crate::tx::{SubmissionRequest, TxStatus, TxSubmission, Witness};

/// Wallet-extension signing contract.
pub trait WalletSigner {
    /// Ask the user to sign. A refusal is [`BridgeError::UserDeclined`].
    fn sign(&self, request: &SubmissionRequest)
        -> impl Future<Output = Result<Witness, BridgeError>>;
}

/// Transaction-building service contract.
pub trait SubmissionBridge {
    fn submit(
        &self,
        request: &SubmissionRequest,
        witness: &Witness,
    ) -> impl Future<Output = Result<TxSubmission, BridgeError>>;

    fn tx_status(&self, tx_id: &TxId) -> impl Future<Output = Result<TxStatus, BridgeError>>;
}

/// Sign with the wallet, then hand the signed request to the bridge.
pub async fn sign_and_submit<W, B>(
    signer: &W,
    bridge: &B,
    request: &SubmissionRequest,
) -> Result<TxSubmission, BridgeError>
where
    W: WalletSigner,
    B: SubmissionBridge,
{
    let witness = signer.sign(request).await?;
    let submission = bridge.submit(request, &witness).await?;
    tracing::info!(kind = request.kind(), tx = %submission.tx_id, "transaction submitted");
    Ok(submission)
}
