//! Proposal form lifecycle.
//!
//! `Draft → Reviewing → Submitting → Confirmed | Rejected`
//!
//! - Any field edit while reviewing drops the review snapshot (back to `Draft`).
//! - A declined wallet signature returns to `Reviewing` without an error.
//! - A bridge failure lands in `Rejected` with the failure's own message;
//!   `edit()` from there returns to `Draft` with every field kept.

use std::collections::HashSet;

use govtool_types::{NetworkId, ProposalType, TxId};
use govtool_validation::{anchor_url_validity, validate_anchor, AnchorError, Validity};

use crate::error::GovernanceError;
use crate::links::MAX_LINKS;
use crate::proposal::{Field, FieldIssue, ProposalContent, ProposalDraft, ProposalPayload};

/// Where the form is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormState {
    Draft,
    Reviewing,
    /// Handed to the bridge; `tx_id` is known once the bridge accepted it.
    Submitting { tx_id: Option<TxId> },
    Confirmed { tx_id: TxId },
    Rejected { message: String },
}

impl FormState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Reviewing => "reviewing",
            Self::Submitting { .. } => "submitting",
            Self::Confirmed { .. } => "confirmed",
            Self::Rejected { .. } => "rejected",
        }
    }
}

/// The proposal submission form.
pub struct ProposalForm {
    network: NetworkId,
    draft: ProposalDraft,
    touched: HashSet<Field>,
    state: FormState,
    review: Option<ProposalContent>,
    anchor_url: String,
    anchor_hash: String,
    anchor_touched: bool,
}

impl ProposalForm {
    pub fn new(network: NetworkId, proposal_type: ProposalType) -> Self {
        Self {
            network,
            draft: ProposalDraft::new(proposal_type),
            touched: HashSet::new(),
            state: FormState::Draft,
            review: None,
            anchor_url: String::new(),
            anchor_hash: String::new(),
            anchor_touched: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ProposalDraft {
        &self.draft
    }

    /// The snapshot shown on the review screen.
    pub fn review(&self) -> Option<&ProposalContent> {
        self.review.as_ref()
    }

    /// Editing is allowed unless a submission is in flight or done.
    fn begin_edit(&mut self) -> Result<(), GovernanceError> {
        match self.state {
            FormState::Draft => Ok(()),
            FormState::Reviewing | FormState::Rejected { .. } => {
                tracing::debug!(from = self.state.name(), "edit returns form to draft");
                self.state = FormState::Draft;
                self.review = None;
                Ok(())
            }
            FormState::Submitting { .. } => Err(GovernanceError::SubmissionInFlight),
            FormState::Confirmed { .. } => Err(GovernanceError::WrongState("confirmed")),
        }
    }

    pub fn set_type(&mut self, proposal_type: ProposalType) -> Result<(), GovernanceError> {
        self.begin_edit()?;
        self.draft.proposal_type = proposal_type;
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), GovernanceError> {
        self.begin_edit()?;
        let slot = match field {
            Field::Title => &mut self.draft.title,
            Field::Abstract => &mut self.draft.abstract_text,
            Field::Motivation => &mut self.draft.motivation,
            Field::Rationale => &mut self.draft.rationale,
            Field::ReceivingAddress => &mut self.draft.receiving_address,
            Field::Amount => &mut self.draft.amount,
            Field::Link(i) => {
                let text = self
                    .draft
                    .links
                    .iter()
                    .nth(i)
                    .map(|l| l.text.clone())
                    .ok_or(GovernanceError::NoSuchLink(i))?;
                self.draft.links.set(i, value, &text)?;
                self.touched.insert(field);
                return Ok(());
            }
        };
        *slot = value.to_string();
        self.touched.insert(field);
        Ok(())
    }

    pub fn set_link(&mut self, index: usize, url: &str, text: &str) -> Result<(), GovernanceError> {
        self.begin_edit()?;
        self.draft.links.set(index, url, text)?;
        self.touched.insert(Field::Link(index));
        Ok(())
    }

    /// Whether the add-link control is shown.
    pub fn can_add_link(&self) -> bool {
        self.draft.links.can_add()
    }

    /// A refused add leaves the state untouched, review snapshot included.
    pub fn add_link(&mut self) -> Result<usize, GovernanceError> {
        if !self.draft.links.can_add() {
            return Err(GovernanceError::TooManyLinks { max: MAX_LINKS });
        }
        self.begin_edit()?;
        self.draft.links.add()
    }

    pub fn remove_link(&mut self, index: usize) -> Result<(), GovernanceError> {
        if index >= self.draft.links.len() {
            return Err(GovernanceError::NoSuchLink(index));
        }
        self.begin_edit()?;
        self.draft.links.remove(index)?;
        // Indices after the removed row shift down.
        self.touched.retain(|f| !matches!(f, Field::Link(i) if *i >= index));
        Ok(())
    }

    /// Errors to show inline: only for fields the user has touched.
    pub fn visible_errors(&self) -> Vec<FieldIssue> {
        self.draft
            .fields()
            .into_iter()
            .filter(|f| self.touched.contains(f))
            .filter_map(|field| {
                self.draft
                    .check(field, self.network)
                    .err()
                    .map(|error| FieldIssue { field, error })
            })
            .collect()
    }

    /// Whether the continue button is enabled.
    pub fn can_continue(&self) -> bool {
        self.state == FormState::Draft && self.draft.validate(self.network).is_ok()
    }

    /// `Draft → Reviewing` once every required field passes.
    pub fn continue_to_review(&mut self) -> Result<&ProposalContent, GovernanceError> {
        if self.state != FormState::Draft {
            return Err(GovernanceError::WrongState(self.state.name()));
        }
        match self.draft.validate(self.network) {
            Ok(content) => {
                tracing::debug!(title = %content.title, "proposal ready for review");
                self.state = FormState::Reviewing;
                Ok(self.review.insert(content))
            }
            Err(issues) => {
                self.touched.extend(issues.iter().map(|i| i.field));
                Err(GovernanceError::Invalid(issues))
            }
        }
    }

    /// Return from the review screen (or a rejection) to editing.
    pub fn edit(&mut self) -> Result<(), GovernanceError> {
        match self.state {
            FormState::Reviewing | FormState::Rejected { .. } => self.begin_edit(),
            _ => Err(GovernanceError::WrongState(self.state.name())),
        }
    }

    pub fn set_anchor_url(&mut self, url: &str) -> Result<(), GovernanceError> {
        self.require_reviewing()?;
        self.anchor_url = url.to_string();
        self.anchor_touched = true;
        Ok(())
    }

    pub fn set_anchor_hash(&mut self, hash: &str) -> Result<(), GovernanceError> {
        self.require_reviewing()?;
        self.anchor_hash = hash.to_string();
        Ok(())
    }

    pub fn anchor_url(&self) -> &str {
        &self.anchor_url
    }

    pub fn anchor_hash(&self) -> &str {
        &self.anchor_hash
    }

    pub fn anchor_url_validity(&self) -> Validity<AnchorError> {
        anchor_url_validity(&self.anchor_url, self.anchor_touched)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Reviewing
            && validate_anchor(&self.anchor_url, &self.anchor_hash).is_ok()
    }

    /// `Reviewing → Submitting`: returns the payload for the bridge.
    pub fn confirm(&mut self) -> Result<ProposalPayload, GovernanceError> {
        match self.state {
            FormState::Reviewing => {}
            FormState::Submitting { .. } => return Err(GovernanceError::SubmissionInFlight),
            _ => return Err(GovernanceError::WrongState(self.state.name())),
        }
        let anchor = validate_anchor(&self.anchor_url, &self.anchor_hash)?;
        let content = self
            .review
            .clone()
            .ok_or(GovernanceError::WrongState("reviewing without snapshot"))?;
        tracing::info!(title = %content.title, anchor = %anchor.url, "submitting proposal");
        self.state = FormState::Submitting { tx_id: None };
        Ok(ProposalPayload { content, anchor })
    }

    /// The bridge accepted the transaction and returned its id.
    pub fn on_submitted(&mut self, tx_id: TxId) -> Result<(), GovernanceError> {
        match &mut self.state {
            FormState::Submitting { tx_id: slot } => {
                *slot = Some(tx_id);
                Ok(())
            }
            other => Err(GovernanceError::WrongState(other.name())),
        }
    }

    /// The wallet declined to sign: silently back to the review screen.
    pub fn on_signing_declined(&mut self) -> Result<(), GovernanceError> {
        self.require_submitting()?;
        tracing::debug!("signature declined, back to review");
        self.state = FormState::Reviewing;
        Ok(())
    }

    pub fn on_confirmed(&mut self, tx_id: TxId) -> Result<(), GovernanceError> {
        self.require_submitting()?;
        tracing::info!(tx = %tx_id, "proposal confirmed");
        self.state = FormState::Confirmed { tx_id };
        Ok(())
    }

    pub fn on_failed(&mut self, message: impl Into<String>) -> Result<(), GovernanceError> {
        self.require_submitting()?;
        let message = message.into();
        tracing::warn!(%message, "proposal submission rejected");
        self.state = FormState::Rejected { message };
        Ok(())
    }

    fn require_reviewing(&self) -> Result<(), GovernanceError> {
        if self.state == FormState::Reviewing {
            Ok(())
        } else {
            Err(GovernanceError::WrongState(self.state.name()))
        }
    }

    fn require_submitting(&self) -> Result<(), GovernanceError> {
        match self.state {
            FormState::Submitting { .. } => Ok(()),
            _ => Err(GovernanceError::WrongState(self.state.name())),
        }
    }
}
