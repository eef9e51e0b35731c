//! HTTP client for the transaction-building service.

use std::time::Duration;

use serde::Serialize;

use govtool_types::TxId;

use crate::bridge::SubmissionBridge;
use crate::error::BridgeError;
use crate::tx::{SubmissionRequest, TxStatus, TxStatusResponse, TxSubmission, Witness};

/// Body of `POST /api/v1/tx`.
#[derive(Serialize)]
struct SubmitBody<'a> {
    #[serde(flatten)]
    request: &'a SubmissionRequest,
    witness: &'a Witness,
}

/// Wraps `reqwest::Client` with the bridge base URL.
#[derive(Clone)]
pub struct HttpBridge {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBridge {
    /// Create a client targeting the given base URL (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, BridgeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| BridgeError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tx_url(&self) -> String {
        format!("{}/api/v1/tx", self.base_url)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BridgeError> {
        let status = response.status();
        if !status.is_success() {
            // Rejections carry a reason body; anything else is transport trouble.
            let body = response.text().await.unwrap_or_default();
            return match serde_json::from_str::<TxStatusResponse>(&body) {
                Ok(r) if r.status == "failed" => {
                    Err(BridgeError::from_reason(&r.reason.unwrap_or_default()))
                }
                _ => Err(BridgeError::Http(format!("bridge returned HTTP {status}"))),
            };
        }
        response
            .json()
            .await
            .map_err(|e| BridgeError::Http(format!("invalid JSON response: {e}")))
    }
}

impl SubmissionBridge for HttpBridge {
    async fn submit(
        &self,
        request: &SubmissionRequest,
        witness: &Witness,
    ) -> Result<TxSubmission, BridgeError> {
        tracing::debug!(kind = request.kind(), url = %self.tx_url(), "submitting to bridge");
        let response = self
            .http
            .post(self.tx_url())
            .json(&SubmitBody { request, witness })
            .send()
            .await
            .map_err(|e| BridgeError::Http(format!("request failed: {e}")))?;
        Self::read_json(response).await
    }

    async fn tx_status(&self, tx_id: &TxId) -> Result<TxStatus, BridgeError> {
        let response = self
            .http
            .get(format!("{}/{tx_id}", self.tx_url()))
            .send()
            .await
            .map_err(|e| BridgeError::Http(format!("request failed: {e}")))?;
        let body: TxStatusResponse = Self::read_json(response).await?;
        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_governance::DRepUpdatePayload;
    use govtool_types::{AnchorHash, MetadataAnchor};

    #[test]
    fn submit_body_flattens_request() {
        let request = SubmissionRequest::DRepUpdate(DRepUpdatePayload {
            anchor: MetadataAnchor::new("https://example.com", AnchorHash::new([0xab; 32])),
            profile: None,
        });
        let witness = Witness("a100".into());
        let json = serde_json::to_value(SubmitBody {
            request: &request,
            witness: &witness,
        })
        .unwrap();
        assert_eq!(json["kind"], "dRepUpdate");
        assert_eq!(json["witness"], "a100");
        assert_eq!(json["payload"]["anchor"]["url"], "https://example.com");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let bridge = HttpBridge::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(bridge.tx_url(), "http://127.0.0.1:8080/api/v1/tx");
    }

    #[tokio::test]
    async fn unreachable_bridge_is_http_error() {
        let bridge = HttpBridge::new("http://127.0.0.1:1").unwrap();
        let err = bridge.tx_status(&TxId::new([0; 32])).await.unwrap_err();
        assert!(matches!(err, BridgeError::Http(_)));
    }
}
