//! Governance vocabulary: proposal types, vote choices, action ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;
use crate::hash::TxId;

/// Kind of governance action a proposal becomes once submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalType {
    /// Informational action, no on-chain effect beyond the vote.
    Info,
    /// Treasury withdrawal to a receiving address.
    Treasury,
}

impl ProposalType {
    pub const ALL: [ProposalType; 2] = [ProposalType::Info, ProposalType::Treasury];

    /// Label shown in the type selector and on the review screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Treasury => "Treasury",
        }
    }

    /// Whether the form must collect a receiving address and amount.
    pub fn requires_withdrawal(&self) -> bool {
        matches!(self, Self::Treasury)
    }
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProposalType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "treasury" => Ok(Self::Treasury),
            other => Err(TypeError::UnknownProposalType(other.to_string())),
        }
    }
}

/// A vote on a governance action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
    Abstain,
}

impl VoteChoice {
    pub const ALL: [VoteChoice; 3] = [VoteChoice::Yes, VoteChoice::No, VoteChoice::Abstain];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Abstain => "Abstain",
        }
    }

    /// Lower-case key used in the radio test ids (`yes-radio`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Abstain => "abstain",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VoteChoice {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "abstain" => Ok(Self::Abstain),
            other => Err(TypeError::UnknownVoteChoice(other.to_string())),
        }
    }
}

/// Identifies a governance action: the proposing transaction and the
/// action's index within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GovActionId {
    pub tx_id: TxId,
    pub index: u32,
}

impl GovActionId {
    pub fn new(tx_id: TxId, index: u32) -> Self {
        Self { tx_id, index }
    }
}

impl fmt::Display for GovActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tx_id, self.index)
    }
}

impl FromStr for GovActionId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tx, index) = s
            .split_once('#')
            .ok_or_else(|| TypeError::InvalidGovActionId(s.to_string()))?;
        let tx_id = tx.parse()?;
        let index = index
            .parse()
            .map_err(|_| TypeError::InvalidGovActionId(s.to_string()))?;
        Ok(Self { tx_id, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gov_action_id_display_and_parse() {
        let id = GovActionId::new(TxId::new([0xab; 32]), 3);
        let s = id.to_string();
        assert!(s.ends_with("#3"));
        assert_eq!(s.parse::<GovActionId>().unwrap(), id);
    }

    #[test]
    fn gov_action_id_without_index_is_rejected() {
        let raw = "ab".repeat(32);
        assert!(matches!(
            raw.parse::<GovActionId>(),
            Err(TypeError::InvalidGovActionId(_))
        ));
    }

    #[test]
    fn vote_choice_parses_case_insensitively() {
        assert_eq!("ABSTAIN".parse::<VoteChoice>().unwrap(), VoteChoice::Abstain);
        assert!("maybe".parse::<VoteChoice>().is_err());
    }

    #[test]
    fn only_treasury_requires_withdrawal() {
        assert!(ProposalType::Treasury.requires_withdrawal());
        assert!(!ProposalType::Info.requires_withdrawal());
    }
}
