//! Wire types exchanged with the transaction-building service.

use serde::{Deserialize, Serialize};

use govtool_governance::{DRepUpdatePayload, ProposalPayload, VotePayload};
use govtool_types::TxId;

/// A structured request for the bridge to build and submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum SubmissionRequest {
    Proposal(ProposalPayload),
    Vote(VotePayload),
    DRepUpdate(DRepUpdatePayload),
}

impl SubmissionRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Proposal(_) => "proposal",
            Self::Vote(_) => "vote",
            Self::DRepUpdate(_) => "dRepUpdate",
        }
    }
}

/// Witness set returned by the wallet extension, hex-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Witness(pub String);

/// The bridge accepted the transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSubmission {
    pub tx_id: TxId,
    /// Opaque token the bridge uses to lock the wallet's inputs until the tx settles.
    pub lock_info: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed { reason: String },
}

/// Body of `GET /api/v1/tx/{txId}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct TxStatusResponse {
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl From<TxStatusResponse> for TxStatus {
    fn from(r: TxStatusResponse) -> Self {
        match r.status.as_str() {
            "confirmed" => Self::Confirmed,
            "failed" => Self::Failed {
                reason: r.reason.unwrap_or_default(),
            },
            _ => Self::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_types::{GovActionId, VoteChoice};

    #[test]
    fn request_is_tagged_by_kind() {
        let request = SubmissionRequest::Vote(VotePayload {
            action: GovActionId::new(TxId::new([1; 32]), 2),
            choice: VoteChoice::Abstain,
            rationale: None,
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "vote");
        assert_eq!(json["payload"]["choice"], serde_json::to_value(VoteChoice::Abstain).unwrap());
    }

    #[test]
    fn status_response_mapping() {
        let failed: TxStatusResponse =
            serde_json::from_str(r#"{"status":"failed","reason":"url_not_found"}"#).unwrap();
        assert_eq!(
            TxStatus::from(failed),
            TxStatus::Failed {
                reason: "url_not_found".into()
            }
        );
        let pending: TxStatusResponse = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(TxStatus::from(pending), TxStatus::Pending);
    }
}
