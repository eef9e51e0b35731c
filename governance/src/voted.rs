//! Locally known votes, keyed by governance action.

use std::collections::BTreeMap;

use govtool_types::{GovActionId, TxId, VoteChoice};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastVote {
    pub choice: VoteChoice,
    pub tx_id: TxId,
}

/// The voted list. A confirmed re-vote replaces the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct VotedActions {
    votes: BTreeMap<GovActionId, CastVote>,
}

impl VotedActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed vote. Returns the choice it replaced, if any.
    pub fn record(&mut self, action: GovActionId, vote: CastVote) -> Option<VoteChoice> {
        let replaced = self.votes.insert(action, vote).map(|prev| prev.choice);
        if let Some(prev) = replaced {
            tracing::debug!(from = prev.key(), to = vote.choice.key(), "vote replaced");
        }
        replaced
    }

    pub fn get(&self, action: &GovActionId) -> Option<&CastVote> {
        self.votes.get(action)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GovActionId, &CastVote)> {
        self.votes.iter()
    }
}
