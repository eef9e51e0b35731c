//! Nullable transaction bridge.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use govtool_bridge::{
    BridgeError, SubmissionBridge, SubmissionRequest, TxStatus, TxSubmission, Witness,
};
use govtool_types::TxId;

/// Accepts submissions and confirms them after a scripted number of polls.
///
/// Metadata URLs marked unreachable make the submission fail the way the
/// real service does when it cannot fetch the anchor document.
pub struct NullBridge {
    next_tx: Cell<u64>,
    submitted: RefCell<Vec<(TxId, SubmissionRequest)>>,
    unreachable: RefCell<HashSet<String>>,
    fail_next: RefCell<Option<BridgeError>>,
    pending_polls: Cell<u32>,
    outcome: RefCell<TxStatus>,
    polls: RefCell<HashMap<TxId, u32>>,
}

impl Default for NullBridge {
    fn default() -> Self {
        Self {
            next_tx: Cell::new(1),
            submitted: RefCell::new(Vec::new()),
            unreachable: RefCell::new(HashSet::new()),
            fail_next: RefCell::new(None),
            pending_polls: Cell::new(0),
            outcome: RefCell::new(TxStatus::Confirmed),
            polls: RefCell::new(HashMap::new()),
        }
    }
}

impl NullBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status requests answered `pending` before the outcome is reported.
    pub fn set_pending_polls(&self, polls: u32) {
        self.pending_polls.set(polls);
    }

    /// Terminal status reported for every transaction.
    pub fn set_outcome(&self, status: TxStatus) {
        *self.outcome.borrow_mut() = status;
    }

    pub fn mark_unreachable(&self, url: &str) {
        self.unreachable.borrow_mut().insert(url.to_string());
    }

    /// Fail the next submission with `error`.
    pub fn fail_next_submission(&self, error: BridgeError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    pub fn submitted(&self) -> Vec<(TxId, SubmissionRequest)> {
        self.submitted.borrow().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submitted.borrow().len()
    }

    fn anchor_url(request: &SubmissionRequest) -> Option<&str> {
        match request {
            SubmissionRequest::Proposal(p) => Some(&p.anchor.url),
            SubmissionRequest::DRepUpdate(d) => Some(&d.anchor.url),
            SubmissionRequest::Vote(v) => v.rationale.as_deref(),
        }
    }

    fn allocate_tx_id(&self) -> TxId {
        let n = self.next_tx.get();
        self.next_tx.set(n + 1);
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        TxId::new(bytes)
    }
}

impl SubmissionBridge for NullBridge {
    async fn submit(
        &self,
        request: &SubmissionRequest,
        _witness: &Witness,
    ) -> Result<TxSubmission, BridgeError> {
        if let Some(error) = self.fail_next.borrow_mut().take() {
            return Err(error);
        }
        if let Some(url) = Self::anchor_url(request) {
            if self.unreachable.borrow().contains(url) {
                return Err(BridgeError::UrlNotFound);
            }
        }
        let tx_id = self.allocate_tx_id();
        self.submitted.borrow_mut().push((tx_id, request.clone()));
        Ok(TxSubmission {
            tx_id,
            lock_info: format!("lock-{tx_id}"),
        })
    }

    async fn tx_status(&self, tx_id: &TxId) -> Result<TxStatus, BridgeError> {
        if !self.submitted.borrow().iter().any(|(id, _)| id == tx_id) {
            return Err(BridgeError::Http("bridge returned HTTP 404 Not Found".into()));
        }
        let mut polls = self.polls.borrow_mut();
        let seen = polls.entry(*tx_id).or_insert(0);
        *seen += 1;
        if *seen <= self.pending_polls.get() {
            Ok(TxStatus::Pending)
        } else {
            Ok(self.outcome.borrow().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_bridge::{poll_transaction, BridgeConfig};
    use govtool_governance::VotePayload;
    use govtool_types::{GovActionId, VoteChoice};

    fn vote_request(rationale: Option<&str>) -> SubmissionRequest {
        SubmissionRequest::Vote(VotePayload {
            action: GovActionId::new(TxId::new([1; 32]), 0),
            choice: VoteChoice::Yes,
            rationale: rationale.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn confirms_after_pending_polls() {
        let bridge = NullBridge::new();
        bridge.set_pending_polls(2);
        let sub = bridge
            .submit(&vote_request(None), &Witness("a1".into()))
            .await
            .unwrap();
        assert_eq!(bridge.tx_status(&sub.tx_id).await, Ok(TxStatus::Pending));
        let config = BridgeConfig {
            poll_interval_ms: 1,
            tx_timeout_secs: 1,
        };
        poll_transaction(&bridge, &sub.tx_id, &config).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_url_fails_submission() {
        let bridge = NullBridge::new();
        bridge.mark_unreachable("https://gone.example.com/why");
        let err = bridge
            .submit(
                &vote_request(Some("https://gone.example.com/why")),
                &Witness("a1".into()),
            )
            .await
            .unwrap_err();
        assert_eq!(err, BridgeError::UrlNotFound);
        assert_eq!(bridge.submission_count(), 0);
    }

    #[tokio::test]
    async fn tx_ids_are_distinct() {
        let bridge = NullBridge::new();
        let a = bridge.submit(&vote_request(None), &Witness("a1".into())).await.unwrap();
        let b = bridge.submit(&vote_request(None), &Witness("a1".into())).await.unwrap();
        assert_ne!(a.tx_id, b.tx_id);
    }
}
