//! Parse errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("invalid stake key: {0}")]
    InvalidStakeKey(String),

    #[error("invalid governance action id: {0}")]
    InvalidGovActionId(String),

    #[error("unknown vote choice: {0}")]
    UnknownVoteChoice(String),

    #[error("unknown proposal type: {0}")]
    UnknownProposalType(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid ADA amount: {0}")]
    InvalidAmount(String),
}
