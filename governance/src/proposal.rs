//! Proposal drafts and their validated payloads.

use govtool_types::{Lovelace, MetadataAnchor, NetworkId, ProposalType};
use govtool_validation::proposal::{
    validate_abstract, validate_amount, validate_link, validate_motivation, validate_rationale,
    validate_title,
};
use govtool_validation::{validate_receiving_address, FieldError};
use serde::{Deserialize, Serialize};

use crate::links::{Link, LinkList};

/// An editable proposal field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Abstract,
    Motivation,
    Rationale,
    ReceivingAddress,
    Amount,
    Link(usize),
}

/// One failed field and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub error: FieldError,
}

/// Treasury withdrawal details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub receiving_address: String,
    pub amount: Lovelace,
}

/// The raw contents of the proposal form, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalDraft {
    pub proposal_type: ProposalType,
    pub title: String,
    pub abstract_text: String,
    pub motivation: String,
    pub rationale: String,
    pub receiving_address: String,
    pub amount: String,
    pub links: LinkList,
}

impl ProposalDraft {
    pub fn new(proposal_type: ProposalType) -> Self {
        Self {
            proposal_type,
            title: String::new(),
            abstract_text: String::new(),
            motivation: String::new(),
            rationale: String::new(),
            receiving_address: String::new(),
            amount: String::new(),
            links: LinkList::new(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Abstract => &self.abstract_text,
            Field::Motivation => &self.motivation,
            Field::Rationale => &self.rationale,
            Field::ReceivingAddress => &self.receiving_address,
            Field::Amount => &self.amount,
            Field::Link(i) => self.links.iter().nth(i).map_or("", |l| l.url.as_str()),
        }
    }

    /// Check a single field.
    pub fn check(&self, field: Field, network: NetworkId) -> Result<(), FieldError> {
        match field {
            Field::Title => validate_title(&self.title),
            Field::Abstract => validate_abstract(&self.abstract_text),
            Field::Motivation => validate_motivation(&self.motivation),
            Field::Rationale => validate_rationale(&self.rationale),
            Field::ReceivingAddress => {
                validate_receiving_address(&self.receiving_address, network)
            }
            Field::Amount => validate_amount(&self.amount).map(|_| ()),
            Field::Link(i) => match self.links.iter().nth(i) {
                Some(link) if link.url.is_empty() && link.text.is_empty() => Ok(()),
                Some(link) => validate_link(&link.url, &link.text),
                None => Ok(()),
            },
        }
    }

    /// Fields that apply to the current proposal type.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::Title,
            Field::Abstract,
            Field::Motivation,
            Field::Rationale,
        ];
        if self.proposal_type.requires_withdrawal() {
            fields.push(Field::ReceivingAddress);
            fields.push(Field::Amount);
        }
        fields.extend((0..self.links.len()).map(Field::Link));
        fields
    }

    /// Validate every applicable field and build the reviewable content.
    pub fn validate(&self, network: NetworkId) -> Result<ProposalContent, Vec<FieldIssue>> {
        let issues: Vec<FieldIssue> = self
            .fields()
            .into_iter()
            .filter_map(|field| {
                self.check(field, network)
                    .err()
                    .map(|error| FieldIssue { field, error })
            })
            .collect();
        if !issues.is_empty() {
            return Err(issues);
        }

        let withdrawal = if self.proposal_type.requires_withdrawal() {
            let amount = validate_amount(&self.amount).map_err(|error| {
                vec![FieldIssue {
                    field: Field::Amount,
                    error,
                }]
            })?;
            Some(Withdrawal {
                receiving_address: self.receiving_address.trim().to_string(),
                amount,
            })
        } else {
            None
        };

        Ok(ProposalContent {
            proposal_type: self.proposal_type,
            title: self.title.trim().to_string(),
            abstract_text: self.abstract_text.clone(),
            motivation: self.motivation.clone(),
            rationale: self.rationale.clone(),
            links: self.links.filled(),
            withdrawal,
        })
    }
}

/// Validated proposal content, shown on the review screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContent {
    pub proposal_type: ProposalType,
    pub title: String,
    pub abstract_text: String,
    pub motivation: String,
    pub rationale: String,
    pub links: Vec<Link>,
    pub withdrawal: Option<Withdrawal>,
}

/// What the submission bridge receives for a proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalPayload {
    pub content: ProposalContent,
    pub anchor: MetadataAnchor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use govtool_validation::encode_bech32;

    fn filled(proposal_type: ProposalType) -> ProposalDraft {
        let mut draft = ProposalDraft::new(proposal_type);
        draft.title = "Fund the docs".into();
        draft.abstract_text = "Short abstract".into();
        draft.motivation = "Because".into();
        draft.rationale = "Therefore".into();
        draft
    }

    #[test]
    fn info_proposal_needs_no_withdrawal() {
        let content = filled(ProposalType::Info)
            .validate(NetworkId::Preview)
            .unwrap();
        assert_eq!(content.withdrawal, None);
    }

    #[test]
    fn treasury_proposal_requires_address_and_amount() {
        let draft = filled(ProposalType::Treasury);
        let issues = draft.validate(NetworkId::Preview).unwrap_err();
        let fields: Vec<Field> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![Field::ReceivingAddress, Field::Amount]);
    }

    #[test]
    fn treasury_proposal_with_zero_amount_is_rejected() {
        let mut draft = filled(ProposalType::Treasury);
        draft.receiving_address = encode_bech32("addr_test", &[1; 29]);
        draft.amount = "0".into();
        let issues = draft.validate(NetworkId::Preview).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].error, FieldError::NotPositive);
    }

    #[test]
    fn valid_treasury_proposal_carries_withdrawal() {
        let mut draft = filled(ProposalType::Treasury);
        let address = encode_bech32("addr_test", &[1; 29]);
        draft.receiving_address = address.clone();
        draft.amount = "250.5".into();
        let content = draft.validate(NetworkId::Preview).unwrap();
        assert_eq!(
            content.withdrawal,
            Some(Withdrawal {
                receiving_address: address,
                amount: Lovelace::new(250_500_000),
            })
        );
    }

    #[test]
    fn blank_link_rows_are_ignored_but_bad_urls_are_not() {
        let mut draft = filled(ProposalType::Info);
        draft.links.add().unwrap();
        assert!(draft.validate(NetworkId::Preview).is_ok());

        let i = draft.links.add().unwrap();
        draft.links.set(i, "not a url", "label").unwrap();
        let issues = draft.validate(NetworkId::Preview).unwrap_err();
        assert_eq!(issues[0].field, Field::Link(1));
    }

    #[test]
    fn missing_text_fields_are_all_reported() {
        let draft = ProposalDraft::new(ProposalType::Info);
        let issues = draft.validate(NetworkId::Preview).unwrap_err();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| i.error == FieldError::Required));
    }
}
