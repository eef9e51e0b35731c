//! The connected wallet and its lifecycle.

use govtool_types::{DRepId, NetworkId, StakeKey, TxId};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::storage::{KeyValueStore, SessionStore};
use crate::voting_power::QueryState;

/// DRep registration of the connected wallet's DRep key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DRepStatus {
    pub drep_id: DRepId,
    pub is_registered: bool,
}

/// What an in-flight transaction is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Vote,
    ProposalSubmission,
    DRepUpdate,
}

/// A submitted transaction the portal is waiting on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub tx_id: TxId,
    pub kind: TxKind,
}

/// The connected wallet.
#[derive(Clone, Debug)]
pub struct WalletSession {
    pub stake_key: StakeKey,
    pub wallet_name: String,
    pub network: NetworkId,
    /// DRep status; `Loading` until the backend has answered.
    pub drep: QueryState<DRepStatus>,
    pending: Option<PendingTransaction>,
}

impl WalletSession {
    pub fn new(stake_key: StakeKey, wallet_name: impl Into<String>, network: NetworkId) -> Self {
        Self {
            stake_key,
            wallet_name: wallet_name.into(),
            network,
            drep: QueryState::Loading,
            pending: None,
        }
    }

    /// Whether the wallet's DRep key is a registered DRep. `false` while loading.
    pub fn is_registered_drep(&self) -> bool {
        matches!(&self.drep, QueryState::Ready(s) if s.is_registered)
    }

    pub fn is_drep_loading(&self) -> bool {
        self.drep.is_loading()
    }

    pub fn drep_id(&self) -> Option<&DRepId> {
        self.drep.ready().map(|s| &s.drep_id)
    }

    pub fn pending_transaction(&self) -> Option<&PendingTransaction> {
        self.pending.as_ref()
    }

    pub fn is_pending_transaction(&self) -> bool {
        self.pending.is_some()
    }
}

/// Holds at most one active session and mirrors it into local storage.
pub struct SessionContext<S> {
    store: SessionStore<S>,
    network: NetworkId,
    active: Option<WalletSession>,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: SessionStore<S>, network: NetworkId) -> Self {
        Self {
            store,
            network,
            active: None,
        }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    /// Connect a wallet. Fails if another session is already active.
    pub fn connect(
        &mut self,
        stake_key: StakeKey,
        wallet_name: &str,
    ) -> Result<&mut WalletSession, SessionError> {
        if self.active.is_some() {
            return Err(SessionError::AlreadyConnected);
        }
        if !stake_key.is_on(self.network) {
            return Err(SessionError::Other(format!(
                "stake key belongs to another network than {}",
                self.network.as_str()
            )));
        }
        self.store.save(&stake_key, wallet_name)?;
        tracing::info!(wallet = wallet_name, stake_key = %stake_key, "wallet connected");
        Ok(self
            .active
            .insert(WalletSession::new(stake_key, wallet_name, self.network)))
    }

    /// Drop the session and its persisted identifiers.
    pub fn disconnect(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        if let Some(session) = self.active.take() {
            tracing::info!(wallet = %session.wallet_name, "wallet disconnected");
        }
        Ok(())
    }

    /// Whether a wallet is enabled (connected) in this context.
    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.active.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut WalletSession> {
        self.active.as_mut()
    }

    pub fn require_session(&self) -> Result<&WalletSession, SessionError> {
        self.active.as_ref().ok_or(SessionError::NotConnected)
    }

    pub fn set_drep_status(&mut self, status: QueryState<DRepStatus>) -> Result<(), SessionError> {
        let session = self.active.as_mut().ok_or(SessionError::NotConnected)?;
        session.drep = status;
        Ok(())
    }

    pub fn is_pending_transaction(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(WalletSession::is_pending_transaction)
    }

    /// Record a submitted transaction. Only one may be pending at a time.
    pub fn begin_transaction(&mut self, pending: PendingTransaction) -> Result<(), SessionError> {
        let session = self.active.as_mut().ok_or(SessionError::NotConnected)?;
        if session.pending.is_some() {
            return Err(SessionError::TransactionPending);
        }
        tracing::debug!(tx = %pending.tx_id, kind = ?pending.kind, "transaction pending");
        session.pending = Some(pending);
        Ok(())
    }

    /// Clear the pending transaction once it reached a terminal state.
    pub fn finish_transaction(&mut self, tx_id: &TxId) -> Option<PendingTransaction> {
        let session = self.active.as_mut()?;
        let is_current = session
            .pending
            .as_ref()
            .is_some_and(|p| &p.tx_id == tx_id);
        if is_current {
            session.pending.take()
        } else {
            None
        }
    }
}
