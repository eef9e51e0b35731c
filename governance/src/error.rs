use govtool_validation::{AnchorError, FieldError};
use thiserror::Error;

use crate::proposal::FieldIssue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldIssue>),

    #[error("action not allowed while the form is {0}")]
    WrongState(&'static str),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("at most {max} links are allowed")]
    TooManyLinks { max: usize },

    #[error("link {0} does not exist")]
    NoSuchLink(usize),

    #[error("no vote selected")]
    NoVoteSelected,

    #[error("wallet is not allowed to vote on this action")]
    NotEligible,

    #[error("metadata anchor: {0}")]
    Anchor(#[from] AnchorError),

    #[error("{0}")]
    Field(#[from] FieldError),

    #[error("the data storage step must be acknowledged")]
    ConsentRequired,
}
