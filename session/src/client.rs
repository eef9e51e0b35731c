//! HTTP client for the GovTool backend.

use std::time::Duration;

use govtool_types::{DRepId, Lovelace, StakeKey};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::SessionError;
use crate::session::DRepStatus;
use crate::voting_power::VotingPowerSource;

/// Backend client for voting-power and DRep queries.
///
/// Wraps `reqwest::Client` with the backend base URL and provides typed
/// methods for each query the portal needs.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client targeting the given base URL (e.g. `https://be.sanchogov.tools`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SessionError::Backend(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SessionError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "backend request");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SessionError::Backend(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SessionError::Backend(format!(
                "backend returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SessionError::Backend(format!("invalid JSON response: {e}")))
    }
}

/// Response of `GET /drep/info/{drepId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DRepInfoResult {
    is_registered_as_d_rep: bool,
}

impl VotingPowerSource for BackendClient {
    async fn ada_holder_voting_power(&self, stake_key: &StakeKey) -> Result<Lovelace, SessionError> {
        let raw: u64 = self
            .get_json(&format!("/ada-holder/get-voting-power/{}", stake_key.to_hex()))
            .await?;
        Ok(Lovelace::new(raw))
    }

    async fn drep_voting_power(&self, drep_id: &DRepId) -> Result<Lovelace, SessionError> {
        let raw: u64 = self
            .get_json(&format!("/drep/get-voting-power/{drep_id}"))
            .await?;
        Ok(Lovelace::new(raw))
    }

    async fn drep_status(&self, drep_id: &DRepId) -> Result<DRepStatus, SessionError> {
        let info: DRepInfoResult = self.get_json(&format!("/drep/info/{drep_id}")).await?;
        Ok(DRepStatus {
            drep_id: *drep_id,
            is_registered: info.is_registered_as_d_rep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://127.0.0.1:9999/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_drep_info_field_name() {
        let info: DRepInfoResult =
            serde_json::from_str(r#"{"isRegisteredAsDRep": true, "deposit": 2000000}"#).unwrap();
        assert!(info.is_registered_as_d_rep);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_backend_error() {
        let client = BackendClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .drep_voting_power(&DRepId::new([0; 28]))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Backend(_)));
    }
}
