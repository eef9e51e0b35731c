//! Casting a vote on a governance action.

use serde::{Deserialize, Serialize};

use govtool_types::{GovActionId, TxId, VoteChoice};
use govtool_validation::{optional_url_validity, AnchorError, Validity};

use crate::error::GovernanceError;

/// What the submission bridge receives for a vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePayload {
    pub action: GovActionId,
    pub choice: VoteChoice,
    pub rationale: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VotePhase {
    Editing,
    Submitting,
    Confirmed(TxId),
}

/// Vote panel state for one governance action.
#[derive(Clone, Debug)]
pub struct VoteForm {
    action: GovActionId,
    previous: Option<VoteChoice>,
    choice: Option<VoteChoice>,
    rationale: String,
    phase: VotePhase,
}

impl VoteForm {
    pub fn new(action: GovActionId) -> Self {
        Self {
            action,
            previous: None,
            choice: None,
            rationale: String::new(),
            phase: VotePhase::Editing,
        }
    }

    /// Re-vote form: the prior choice is preselected.
    pub fn revote(action: GovActionId, previous: VoteChoice) -> Self {
        Self {
            previous: Some(previous),
            choice: Some(previous),
            ..Self::new(action)
        }
    }

    pub fn action(&self) -> &GovActionId {
        &self.action
    }

    pub fn choice(&self) -> Option<VoteChoice> {
        self.choice
    }

    pub fn previous(&self) -> Option<VoteChoice> {
        self.previous
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn phase(&self) -> VotePhase {
        self.phase
    }

    pub fn select(&mut self, choice: VoteChoice) -> Result<(), GovernanceError> {
        self.require_editing()?;
        self.choice = Some(choice);
        Ok(())
    }

    pub fn set_rationale(&mut self, url: &str) -> Result<(), GovernanceError> {
        self.require_editing()?;
        self.rationale = url.to_string();
        Ok(())
    }

    pub fn rationale_validity(&self) -> Validity<AnchorError> {
        optional_url_validity(&self.rationale)
    }

    /// Whether the vote button is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == VotePhase::Editing
            && self.choice.is_some()
            && !self.rationale_validity().shows_error()
    }

    /// `Editing → Submitting`. `eligible` comes from the session's voting power.
    pub fn submit(&mut self, eligible: bool) -> Result<VotePayload, GovernanceError> {
        match self.phase {
            VotePhase::Editing => {}
            VotePhase::Submitting => return Err(GovernanceError::SubmissionInFlight),
            VotePhase::Confirmed(_) => return Err(GovernanceError::WrongState("confirmed")),
        }
        if !eligible {
            return Err(GovernanceError::NotEligible);
        }
        let choice = self.choice.ok_or(GovernanceError::NoVoteSelected)?;
        if let Validity::Invalid(e) = self.rationale_validity() {
            return Err(e.into());
        }
        let rationale = (!self.rationale.is_empty()).then(|| self.rationale.clone());
        tracing::info!(action = %self.action, choice = choice.key(), "submitting vote");
        self.phase = VotePhase::Submitting;
        Ok(VotePayload {
            action: self.action,
            choice,
            rationale,
        })
    }

    /// Wallet declined or the bridge failed: the draft becomes editable again.
    pub fn on_declined(&mut self) {
        if self.phase == VotePhase::Submitting {
            tracing::debug!(action = %self.action, "vote not signed, back to editing");
            self.phase = VotePhase::Editing;
        }
    }

    pub fn on_failed(&mut self, message: &str) {
        if self.phase == VotePhase::Submitting {
            tracing::warn!(action = %self.action, %message, "vote submission failed");
            self.phase = VotePhase::Editing;
        }
    }

    pub fn on_confirmed(&mut self, tx_id: TxId) -> Result<VoteChoice, GovernanceError> {
        if self.phase != VotePhase::Submitting {
            return Err(GovernanceError::WrongState("not submitting"));
        }
        let choice = self.choice.ok_or(GovernanceError::NoVoteSelected)?;
        self.phase = VotePhase::Confirmed(tx_id);
        self.previous = Some(choice);
        Ok(choice)
    }

    fn require_editing(&self) -> Result<(), GovernanceError> {
        match self.phase {
            VotePhase::Editing => Ok(()),
            VotePhase::Submitting => Err(GovernanceError::SubmissionInFlight),
            VotePhase::Confirmed(_) => Err(GovernanceError::WrongState("confirmed")),
        }
    }
}
