//! Governance flows for GovTool.
//!
//! Everything here is synchronous state: the proposal form lifecycle, the
//! vote panel, the locally known votes and the DRep metadata forms. Async
//! work (signing, submission, confirmation polling) lives in the bridge and
//! portal crates and feeds results back through the `on_*` transitions.

pub mod action;
pub mod drep;
pub mod error;
pub mod form;
pub mod links;
pub mod proposal;
pub mod vote;
pub mod voted;

pub use action::GovernanceAction;
pub use drep::{
    AnchorInput, DRepProfile, DRepProfileForm, DRepUpdatePayload, MetadataUpdateForm, ProfileStep,
};
pub use error::GovernanceError;
pub use form::{FormState, ProposalForm};
pub use links::{Link, LinkList, MAX_LINKS};
pub use proposal::{
    Field, FieldIssue, ProposalContent, ProposalDraft, ProposalPayload, Withdrawal,
};
pub use vote::{VoteForm, VotePayload, VotePhase};
pub use voted::{CastVote, VotedActions};
