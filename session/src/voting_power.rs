//! Voting-power queries and their loading state.

use std::future::Future;

use govtool_types::{DRepId, Lovelace, StakeKey};

use crate::error::SessionError;
use crate::session::{DRepStatus, WalletSession};

/// State of an asynchronous query as seen by a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    fn from_result(result: Result<T, SessionError>, what: &str) -> Self {
        match result {
            Ok(v) => Self::Ready(v),
            Err(e) => {
                tracing::warn!(query = what, error = %e, "query failed");
                Self::Failed(e.to_string())
            }
        }
    }
}

/// Backend queries for voting power and DRep registration.
pub trait VotingPowerSource {
    fn ada_holder_voting_power(
        &self,
        stake_key: &StakeKey,
    ) -> impl Future<Output = Result<Lovelace, SessionError>>;

    fn drep_voting_power(
        &self,
        drep_id: &DRepId,
    ) -> impl Future<Output = Result<Lovelace, SessionError>>;

    fn drep_status(
        &self,
        drep_id: &DRepId,
    ) -> impl Future<Output = Result<DRepStatus, SessionError>>;
}

/// Both voting-power figures for the connected wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingPower {
    pub ada_holder: QueryState<Lovelace>,
    pub drep: QueryState<Lovelace>,
}

impl Default for VotingPower {
    fn default() -> Self {
        Self {
            ada_holder: QueryState::Loading,
            drep: QueryState::Loading,
        }
    }
}

impl VotingPower {
    /// Re-run the queries relevant to `session`.
    ///
    /// The DRep figure is only fetched once the DRep status is known and
    /// registered; otherwise it stays as it was.
    pub async fn refresh<Q: VotingPowerSource>(&mut self, source: &Q, session: &WalletSession) {
        self.ada_holder = QueryState::from_result(
            source.ada_holder_voting_power(&session.stake_key).await,
            "ada_holder_voting_power",
        );
        if session.is_registered_drep() {
            if let Some(drep_id) = session.drep_id() {
                self.drep = QueryState::from_result(
                    source.drep_voting_power(drep_id).await,
                    "drep_voting_power",
                );
            }
        }
    }

    /// The figure the portal shows: DRep power for registered DReps,
    /// ada-holder power otherwise.
    pub fn relevant(&self, session: &WalletSession) -> &QueryState<Lovelace> {
        if session.is_registered_drep() {
            &self.drep
        } else {
            &self.ada_holder
        }
    }

    /// Whether the wallet may vote directly: registered DRep or non-zero stake.
    pub fn can_vote(&self, session: &WalletSession) -> bool {
        session.is_registered_drep()
            || self
                .ada_holder
                .ready()
                .is_some_and(|power| !power.is_zero())
    }
}

/// Fetch the DRep status for `drep_id` into a query state.
pub async fn load_drep_status<Q: VotingPowerSource>(
    source: &Q,
    drep_id: &DRepId,
) -> QueryState<DRepStatus> {
    QueryState::from_result(source.drep_status(drep_id).await, "drep_status")
}
